use chrono::NaiveDate;
use serde_json::json;

use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use eloverblik::models::ApiResponse;
use eloverblik::{Aggregation, CustomerClient, EloverblikError};

mod common;

/// Mounts a token endpoint handing out one access token for the customer
/// refresh token, with no call-count expectation.
async fn mount_token(server: &MockServer, access_token: &str) {
    Mock::given(method("GET"))
        .and(path("/customerapi/api/token"))
        .and(header("authorization", "Bearer customer-refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errorCode": 0,
            "result": access_token
        })))
        .mount(server)
        .await;
}

fn customer_client(server: &MockServer) -> CustomerClient {
    CustomerClient::with_config("customer-refresh", common::mock_config(&server.uri()))
        .expect("client construction failed")
}

/// A fresh access token is exchanged once and reused for subsequent calls
#[tokio::test]
async fn test_access_token_cached_across_calls() {
    let server = MockServer::start().await;
    let access = common::jwt_with_exp(common::epoch_now() + 3600, "fresh");

    // The exchange must happen exactly once for two API calls
    Mock::given(method("GET"))
        .and(path("/customerapi/api/token"))
        .and(header("authorization", "Bearer customer-refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errorCode": 0,
            "result": access.clone()
        })))
        .expect(1)
        .mount(&server)
        .await;

    let bearer = format!("Bearer {}", access);
    Mock::given(method("GET"))
        .and(path("/customerapi/api/isalive"))
        .and(header("authorization", bearer.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .expect(2)
        .mount(&server)
        .await;

    let client = customer_client(&server);
    assert!(client.is_alive().await.unwrap());
    assert!(client.is_alive().await.unwrap());
}

/// A cached token inside the 60s expiry margin is replaced before reuse
#[tokio::test]
async fn test_stale_access_token_refetched() {
    let server = MockServer::start().await;
    let stale = common::jwt_with_exp(common::epoch_now() + 30, "stale");
    let fresh = common::jwt_with_exp(common::epoch_now() + 3600, "fresh");

    // First exchange hands out a token expiring inside the margin
    Mock::given(method("GET"))
        .and(path("/customerapi/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errorCode": 0,
            "result": stale.clone()
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    // Second exchange runs because the cached token is about to expire
    Mock::given(method("GET"))
        .and(path("/customerapi/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errorCode": 0,
            "result": fresh.clone()
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stale_bearer = format!("Bearer {}", stale);
    Mock::given(method("GET"))
        .and(path("/customerapi/api/isalive"))
        .and(header("authorization", stale_bearer.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    let fresh_bearer = format!("Bearer {}", fresh);
    Mock::given(method("GET"))
        .and(path("/customerapi/api/isalive"))
        .and(header("authorization", fresh_bearer.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    let client = customer_client(&server);
    assert!(client.is_alive().await.unwrap());
    assert!(client.is_alive().await.unwrap());
}

/// A token that is not a decodable JWT is treated as already expired
#[tokio::test]
async fn test_opaque_access_token_exchanged_every_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customerapi/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errorCode": 0,
            "result": "opaque-access-token"
        })))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/customerapi/api/isalive"))
        .and(header("authorization", "Bearer opaque-access-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .expect(2)
        .mount(&server)
        .await;

    let client = customer_client(&server);
    assert!(client.is_alive().await.unwrap());
    assert!(client.is_alive().await.unwrap());
}

/// 401 -> token refresh -> retry flow succeeds on the second attempt
#[tokio::test]
async fn test_unauthorized_refreshes_token_and_retries_once() {
    let server = MockServer::start().await;
    let first = common::jwt_with_exp(common::epoch_now() + 3600, "first");
    let second = common::jwt_with_exp(common::epoch_now() + 3600, "second");

    Mock::given(method("GET"))
        .and(path("/customerapi/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errorCode": 0,
            "result": first.clone()
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/customerapi/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errorCode": 0,
            "result": second.clone()
        })))
        .expect(1)
        .mount(&server)
        .await;

    // First attempt is rejected despite the token being freshly issued
    let first_bearer = format!("Bearer {}", first);
    Mock::given(method("GET"))
        .and(path("/customerapi/api/meteringpoints/meteringpoints"))
        .and(query_param("includeAll", "false"))
        .and(header("authorization", first_bearer.as_str()))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .expect(1)
        .mount(&server)
        .await;

    // Retry with the refreshed token succeeds
    let second_bearer = format!("Bearer {}", second);
    Mock::given(method("GET"))
        .and(path("/customerapi/api/meteringpoints/meteringpoints"))
        .and(query_param("includeAll", "false"))
        .and(header("authorization", second_bearer.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errorCode": 0,
            "result": [{
                "meteringPointId": "571313180000000000",
                "typeOfMP": "E17",
                "hasRelation": true
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = customer_client(&server);
    let points = client.get_metering_points(false).await.unwrap();
    assert_eq!(points.len(), 1);
    assert!(points[0].has_relation);
}

/// A second 401 after the refreshed token is terminal, no further retries
#[tokio::test]
async fn test_second_unauthorized_is_terminal() {
    let server = MockServer::start().await;
    let first = common::jwt_with_exp(common::epoch_now() + 3600, "first");
    let second = common::jwt_with_exp(common::epoch_now() + 3600, "second");

    Mock::given(method("GET"))
        .and(path("/customerapi/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errorCode": 0,
            "result": first.clone()
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/customerapi/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errorCode": 0,
            "result": second.clone()
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Exactly two target calls, both rejected
    let first_bearer = format!("Bearer {}", first);
    Mock::given(method("GET"))
        .and(path("/customerapi/api/isalive"))
        .and(header("authorization", first_bearer.as_str()))
        .respond_with(ResponseTemplate::new(401).set_body_string("still rejected"))
        .expect(1)
        .mount(&server)
        .await;

    let second_bearer = format!("Bearer {}", second);
    Mock::given(method("GET"))
        .and(path("/customerapi/api/isalive"))
        .and(header("authorization", second_bearer.as_str()))
        .respond_with(ResponseTemplate::new(401).set_body_string("still rejected"))
        .expect(1)
        .mount(&server)
        .await;

    let client = customer_client(&server);
    let err = client.is_alive().await.unwrap_err();
    match err {
        EloverblikError::Api { code, message, .. } => {
            assert_eq!(code, None);
            assert!(message.contains("401"), "message was: {}", message);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

/// An invalid refresh token maps to an authentication error without retry
#[tokio::test]
async fn test_invalid_refresh_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customerapi/api/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .expect(1)
        .mount(&server)
        .await;

    // The target endpoint must never be reached
    Mock::given(method("GET"))
        .and(path("/customerapi/api/isalive"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .expect(0)
        .mount(&server)
        .await;

    let client = customer_client(&server);
    let err = client.is_alive().await.unwrap_err();
    assert!(matches!(err, EloverblikError::Authentication(_)));
}

/// An envelope reporting failure surfaces its error code unchanged
#[tokio::test]
async fn test_envelope_failure_surfaces_error_code() {
    let server = MockServer::start().await;
    mount_token(&server, &common::jwt_with_exp(common::epoch_now() + 3600, "t")).await;

    Mock::given(method("GET"))
        .and(path("/customerapi/api/meteringpoints/meteringpoints"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "errorCode": 42,
            "errorText": "Quota exceeded"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = customer_client(&server);
    let err = client.get_metering_points(false).await.unwrap_err();
    match err {
        EloverblikError::Api { code, message, body } => {
            assert_eq!(code, Some(42));
            assert_eq!(message, "API error 42: Quota exceeded");
            assert!(body.unwrap().contains("Quota exceeded"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

/// HTTP 429 maps to the rate limit error without a retry
#[tokio::test]
async fn test_rate_limited() {
    let server = MockServer::start().await;
    mount_token(&server, &common::jwt_with_exp(common::epoch_now() + 3600, "t")).await;

    Mock::given(method("GET"))
        .and(path("/customerapi/api/isalive"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .expect(1)
        .mount(&server)
        .await;

    let client = customer_client(&server);
    let err = client.is_alive().await.unwrap_err();
    assert!(matches!(err, EloverblikError::RateLimit(_)));
}

/// HTTP 5xx maps to the server error variant
#[tokio::test]
async fn test_server_error() {
    let server = MockServer::start().await;
    mount_token(&server, &common::jwt_with_exp(common::epoch_now() + 3600, "t")).await;

    Mock::given(method("GET"))
        .and(path("/customerapi/api/isalive"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&server)
        .await;

    let client = customer_client(&server);
    let err = client.is_alive().await.unwrap_err();
    assert!(matches!(err, EloverblikError::Server(_)));
}

/// A non-JSON content type is returned verbatim, even when the body happens
/// to parse as JSON
#[tokio::test]
async fn test_non_json_body_returned_verbatim() {
    let server = MockServer::start().await;
    mount_token(&server, &common::jwt_with_exp(common::epoch_now() + 3600, "t")).await;

    let csv_body = "{\"success\": false, \"errorCode\": 42}";
    Mock::given(method("POST"))
        .and(path("/customerapi/api/meteringpoints/masterdata/export"))
        .and(body_json(json!({
            "meteringPoints": {"meteringPoint": ["571313180000000000"]}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_raw(csv_body, "text/csv"))
        .expect(1)
        .mount(&server)
        .await;

    let client = customer_client(&server);
    let exported = client
        .export_metering_points(&["571313180000000000".to_string()])
        .await
        .unwrap();
    assert_eq!(exported, csv_body);
}

/// The time series export builds the date and aggregation path segments
#[tokio::test]
async fn test_export_time_series_path() {
    let server = MockServer::start().await;
    mount_token(&server, &common::jwt_with_exp(common::epoch_now() + 3600, "t")).await;

    Mock::given(method("POST"))
        .and(path(
            "/customerapi/api/meterdata/timeseries/export/2024-03-01/2024-03-03/Actual",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_raw("header\n1;2;3\n", "text/csv"))
        .expect(1)
        .mount(&server)
        .await;

    let client = customer_client(&server);
    let exported = client
        .export_time_series(
            &["571313180000000000".to_string()],
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
            Aggregation::Actual,
        )
        .await
        .unwrap();
    assert!(exported.starts_with("header"));
}

/// Metering point listing passes includeAll through and decodes the result
#[tokio::test]
async fn test_get_metering_points_decodes_envelope() {
    let server = MockServer::start().await;
    mount_token(&server, &common::jwt_with_exp(common::epoch_now() + 3600, "t")).await;

    Mock::given(method("GET"))
        .and(path("/customerapi/api/meteringpoints/meteringpoints"))
        .and(query_param("includeAll", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errorCode": 0,
            "result": [
                {
                    "meteringPointId": "571313180000000000",
                    "typeOfMP": "E17",
                    "balanceSupplierName": "Energi A/S",
                    "cityName": "Kolding",
                    "hasRelation": true
                },
                {
                    "meteringPointId": "571313180000000001",
                    "typeOfMP": "E18"
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = customer_client(&server);
    let points = client.get_metering_points(true).await.unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].base.type_of_mp.as_deref(), Some("E17"));
    assert!(points[0].has_relation);
    assert!(!points[1].has_relation);
}

/// Details requests send the wrapper body and unwrap the nested envelopes
#[tokio::test]
async fn test_get_details_unwraps_nested_envelopes() {
    let server = MockServer::start().await;
    mount_token(&server, &common::jwt_with_exp(common::epoch_now() + 3600, "t")).await;

    Mock::given(method("POST"))
        .and(path("/customerapi/api/meteringpoints/meteringpoint/getdetails"))
        .and(body_json(json!({
            "meteringPoints": {
                "meteringPoint": ["571313180000000000", "571313180000000001"]
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errorCode": 0,
            "result": [
                {
                    "success": true,
                    "errorCode": 0,
                    "result": {
                        "meteringPointId": "571313180000000000",
                        "gridOperatorName": "N1 A/S",
                        "physicalStatusOfMP": "E22"
                    }
                },
                {
                    "success": false,
                    "errorCode": 10003,
                    "errorText": "No access",
                    "id": "571313180000000001"
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = customer_client(&server);
    let details = client
        .get_details(&[
            "571313180000000000".to_string(),
            "571313180000000001".to_string(),
        ])
        .await
        .unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].grid_operator_name.as_deref(), Some("N1 A/S"));
    assert_eq!(details[0].physical_status_of_mp.as_deref(), Some("E22"));
}

/// Charges decode subscriptions and per-position tariff prices
#[tokio::test]
async fn test_get_charges_decodes_tariffs() {
    let server = MockServer::start().await;
    mount_token(&server, &common::jwt_with_exp(common::epoch_now() + 3600, "t")).await;

    Mock::given(method("POST"))
        .and(path("/customerapi/api/meteringpoints/meteringpoint/getcharges"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errorCode": 0,
            "result": [{
                "success": true,
                "errorCode": 0,
                "result": {
                    "meteringPointId": "571313180000000000",
                    "subscriptions": [{"name": "Abonnement", "price": 23.2, "quantity": 1}],
                    "tariffs": [{
                        "name": "Nettarif C",
                        "periodType": "HOUR",
                        "prices": [{"position": "1", "price": 0.1171}]
                    }],
                    "fees": []
                }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = customer_client(&server);
    let charges = client
        .get_charges(&["571313180000000000".to_string()])
        .await
        .unwrap();
    assert_eq!(charges.len(), 1);

    let tariffs = charges[0].tariffs.as_ref().unwrap();
    assert_eq!(tariffs[0].name.as_deref(), Some("Nettarif C"));
    assert_eq!(tariffs[0].prices.as_ref().unwrap()[0].price, Some(0.1171));
}

/// Time series requests collect the market documents that are present
#[tokio::test]
async fn test_get_time_series_collects_documents() {
    let server = MockServer::start().await;
    mount_token(&server, &common::jwt_with_exp(common::epoch_now() + 3600, "t")).await;

    Mock::given(method("POST"))
        .and(path(
            "/customerapi/api/meterdata/gettimeseries/2024-03-01/2024-03-03/Hour",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errorCode": 0,
            "result": [
                {
                    "MyEnergyData_MarketDocument": {
                        "mRID": "doc-1",
                        "sender_MarketParticipant.name": "Energinet",
                        "TimeSeries": [{
                            "mRID": "571313180000000000",
                            "measurement_Unit.name": "KWH",
                            "Period": [{
                                "resolution": "PT1H",
                                "Point": [
                                    {"position": "1", "out_Quantity.quantity": "1.625", "out_Quantity.quality": "A04"}
                                ]
                            }]
                        }]
                    }
                },
                {}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = customer_client(&server);
    let documents = client
        .get_time_series(
            &["571313180000000000".to_string()],
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
            Aggregation::Hour,
        )
        .await
        .unwrap();

    assert_eq!(documents.len(), 1);
    let series = documents[0].time_series.as_ref().unwrap();
    let points = series[0].periods.as_ref().unwrap()[0].points.as_ref().unwrap();
    assert_eq!(points[0].quantity.as_deref(), Some("1.625"));
    assert_eq!(points[0].quality.as_deref(), Some("A04"));
}

/// Relation management maps the upstream result conventions to booleans
#[tokio::test]
async fn test_relation_add_and_delete() {
    let server = MockServer::start().await;
    mount_token(&server, &common::jwt_with_exp(common::epoch_now() + 3600, "t")).await;

    // Adding by web access code reports the literal string "Success"
    Mock::given(method("PUT"))
        .and(path(
            "/customerapi/api/meteringpoints/meteringpoint/relation/add/571313180000000000/WAC1234",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errorCode": 0,
            "result": "Success"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(
            "/customerapi/api/meteringpoints/meteringpoint/relation/571313180000000000",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errorCode": 0,
            "result": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = customer_client(&server);
    assert!(client
        .add_relation("571313180000000000", "WAC1234")
        .await
        .unwrap());
    assert!(client.delete_relation("571313180000000000").await.unwrap());
}

/// Bulk relation adds return one envelope per metering point
#[tokio::test]
async fn test_add_relations_by_cvr_returns_per_point_envelopes() {
    let server = MockServer::start().await;
    mount_token(&server, &common::jwt_with_exp(common::epoch_now() + 3600, "t")).await;

    Mock::given(method("POST"))
        .and(path("/customerapi/api/meteringpoints/meteringpoint/relation/add"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errorCode": 0,
            "result": [
                {"success": true, "errorCode": 0, "result": "Created"},
                {"success": false, "errorCode": 10002, "errorText": "Not registered to CVR"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = customer_client(&server);
    let outcomes: Vec<ApiResponse<String>> = client
        .add_relations_by_cvr(&[
            "571313180000000000".to_string(),
            "571313180000000001".to_string(),
        ])
        .await
        .unwrap();

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].success);
    assert_eq!(outcomes[0].result.as_deref(), Some("Created"));
    assert!(!outcomes[1].success);
    assert_eq!(outcomes[1].error_code, 10002);
}

/// Liveness accepts both a bare boolean body and the envelope form
#[tokio::test]
async fn test_is_alive_envelope_form() {
    let server = MockServer::start().await;
    mount_token(&server, &common::jwt_with_exp(common::epoch_now() + 3600, "t")).await;

    Mock::given(method("GET"))
        .and(path("/customerapi/api/isalive"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errorCode": 0,
            "result": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = customer_client(&server);
    assert!(client.is_alive().await.unwrap());
}
