//! HTTP plumbing shared by both API surfaces
//!
//! [`ApiClient`] owns the base URL, the HTTP connection pool and the token
//! manager for one surface. Every call acquires an access token, sends the
//! request with bearer and JSON headers and classifies the outcome: a 401
//! invalidates the cached token and retries exactly once with a fresh one,
//! 429 and 5xx map to their own error variants, and JSON envelopes reporting
//! `success: false` become [`EloverblikError::Api`] with the embedded code.
//! Responses with a non-JSON content type (the CSV exports) are returned as
//! verbatim text.

mod customer;
mod third_party;

pub use customer::CustomerClient;
pub use third_party::ThirdPartyClient;

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::config::ClientConfig;
use crate::error::{EloverblikError, Result};
use crate::models::ApiResponse;
use crate::token::TokenManager;

// ---------------------------------------------------------------------------
// Request parameters
// ---------------------------------------------------------------------------

/// Aggregation window for meter data requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Aggregation {
    /// The meter's own registration resolution.
    Actual,
    /// Quarter-hour values.
    Quarter,
    /// Hourly values.
    #[default]
    Hour,
    /// Daily values.
    Day,
    /// Monthly values.
    Month,
    /// Yearly values.
    Year,
}

impl Aggregation {
    /// Path segment used by the meter data endpoints.
    pub fn as_str(self) -> &'static str {
        match self {
            Aggregation::Actual => "Actual",
            Aggregation::Quarter => "Quarter",
            Aggregation::Hour => "Hour",
            Aggregation::Day => "Day",
            Aggregation::Month => "Month",
            Aggregation::Year => "Year",
        }
    }
}

/// Lookup key for third-party authorization queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationScope {
    /// Look up by the authorization's own id.
    AuthorizationId,
    /// Look up by the customer's CVR number.
    CustomerCvr,
    /// Look up by the key the third party assigned to the authorization.
    CustomerKey,
}

impl AuthorizationScope {
    /// Path segment used by the authorization endpoints.
    pub fn as_str(self) -> &'static str {
        match self {
            AuthorizationScope::AuthorizationId => "authorizationId",
            AuthorizationScope::CustomerCvr => "customerCVR",
            AuthorizationScope::CustomerKey => "customerKey",
        }
    }
}

// ---------------------------------------------------------------------------
// Core request pipeline
// ---------------------------------------------------------------------------

/// The two upstream API surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ApiSurface {
    Customer,
    ThirdParty,
}

impl ApiSurface {
    fn prefix(self) -> &'static str {
        match self {
            ApiSurface::Customer => "customerapi",
            ApiSurface::ThirdParty => "thirdpartyapi",
        }
    }
}

/// Decoded response payload, JSON or raw text depending on content type.
#[derive(Debug, Clone)]
pub(crate) enum ResponseBody {
    /// Parsed `application/json` body whose envelope reported success.
    Json(Value),
    /// Verbatim body for any other content type.
    Text(String),
}

/// Authenticated HTTP core bound to one surface.
#[derive(Debug, Clone)]
pub(crate) struct ApiClient {
    http: Client,
    base_url: String,
    surface: ApiSurface,
    tokens: Arc<TokenManager>,
}

impl ApiClient {
    pub(crate) fn new(
        surface: ApiSurface,
        refresh_token: String,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let token_url = format!("{}/{}/api/token", config.base_url, surface.prefix());
        let tokens = Arc::new(TokenManager::new(refresh_token, token_url, http.clone()));

        Ok(Self {
            http,
            base_url: config.base_url,
            surface,
            tokens,
        })
    }

    /// Send an authenticated request and classify the response.
    ///
    /// A 401 on the first attempt invalidates the cached access token and
    /// retries once with a freshly exchanged one. A 401 on the retry is
    /// terminal and reported like any other client error.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ResponseBody> {
        let url = format!("{}/{}/{}", self.base_url, self.surface.prefix(), path);
        let mut retried = false;

        loop {
            let access_token = self.tokens.acquire().await?;

            let mut request = self
                .http
                .request(method.clone(), &url)
                .bearer_auth(&access_token)
                .header(CONTENT_TYPE, "application/json")
                .header("Accept", "application/json");
            if let Some(body) = body {
                request = request.json(body);
            }

            tracing::debug!(%method, path, "Sending request");
            let response = request.send().await?;
            let status = response.status();

            if status == StatusCode::UNAUTHORIZED && !retried {
                tracing::warn!(path, "Access token rejected, refreshing and retrying");
                self.tokens.invalidate();
                retried = true;
                continue;
            }

            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(EloverblikError::RateLimit(format!("HTTP 429 on {}", path)));
            }

            if status.is_server_error() {
                return Err(EloverblikError::Server(format!(
                    "HTTP {} on {}",
                    status.as_u16(),
                    path
                )));
            }

            if !status.is_success() {
                let body_text = response.text().await.unwrap_or_default();
                return Err(EloverblikError::Api {
                    code: None,
                    message: format!("HTTP error {}: {}", status.as_u16(), body_text),
                    body: Some(body_text),
                });
            }

            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_string();

            if !content_type.contains("application/json") {
                return Ok(ResponseBody::Text(response.text().await?));
            }

            let data: Value = response.json().await?;
            check_envelope(&data)?;
            return Ok(ResponseBody::Json(data));
        }
    }

    /// Perform a request that must return a JSON envelope.
    pub(crate) async fn request_json(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value> {
        match self.request(method, path, body).await? {
            ResponseBody::Json(data) => Ok(data),
            ResponseBody::Text(_) => Err(EloverblikError::Api {
                code: None,
                message: format!("Expected JSON response from {}", path),
                body: None,
            }),
        }
    }

    /// Perform a request that must return raw text, such as a CSV export.
    pub(crate) async fn request_text(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<String> {
        match self.request(method, path, body).await? {
            ResponseBody::Text(text) => Ok(text),
            ResponseBody::Json(_) => Err(EloverblikError::Api {
                code: None,
                message: format!("Expected text response from {}", path),
                body: None,
            }),
        }
    }
}

/// Fail when a JSON envelope reports `success: false`.
///
/// A body without a `success` key passes unchanged; only an explicit `false`
/// is treated as an upstream failure.
fn check_envelope(data: &Value) -> Result<()> {
    let success = data.get("success").and_then(Value::as_bool).unwrap_or(true);
    if success {
        return Ok(());
    }

    let code = data
        .get("errorCode")
        .and_then(Value::as_i64)
        .map(|code| code as i32);
    let text = data
        .get("errorText")
        .and_then(Value::as_str)
        .unwrap_or("Unknown API error");
    let message = match code {
        Some(code) => format!("API error {}: {}", code, text),
        None => format!("API error: {}", text),
    };

    Err(EloverblikError::Api {
        code,
        message,
        body: Some(data.to_string()),
    })
}

// ---------------------------------------------------------------------------
// Envelope decoding helpers
// ---------------------------------------------------------------------------

/// Decode the envelope `result` into a list, treating a missing or null
/// result as empty.
pub(crate) fn envelope_result_list<T: DeserializeOwned>(mut data: Value) -> Result<Vec<T>> {
    match data.get_mut("result") {
        Some(result) if !result.is_null() => Ok(serde_json::from_value(result.take())?),
        _ => Ok(Vec::new()),
    }
}

/// Read the envelope `result` as a boolean, defaulting to `false`.
pub(crate) fn envelope_result_bool(data: &Value) -> bool {
    data.get("result").and_then(Value::as_bool).unwrap_or(false)
}

/// Decode a bulk response whose `result` is a list of per-metering-point
/// envelopes, keeping the inner `result` payloads that are present.
pub(crate) fn envelope_nested_results<T: DeserializeOwned>(data: Value) -> Result<Vec<T>> {
    let items: Vec<ApiResponse<T>> = envelope_result_list(data)?;
    Ok(items.into_iter().filter_map(|item| item.result).collect())
}

/// Request body listing metering point ids the way the bulk endpoints expect.
pub(crate) fn metering_points_body(metering_point_ids: &[String]) -> Value {
    json!({ "meteringPoints": { "meteringPoint": metering_point_ids } })
}
