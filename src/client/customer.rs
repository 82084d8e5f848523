//! Customer API surface for accessing your own metering data
//!
//! # Example
//!
//! ```rust,no_run
//! use eloverblik::CustomerClient;
//!
//! # async fn run() -> eloverblik::Result<()> {
//! let client = CustomerClient::new("refresh-token")?;
//! for point in client.get_metering_points(false).await? {
//!     println!("{:?}", point.base.metering_point_id);
//! }
//! # Ok(())
//! # }
//! ```

use chrono::NaiveDate;
use reqwest::Method;
use serde_json::Value;

use super::{
    envelope_nested_results, envelope_result_bool, envelope_result_list, metering_points_body,
    Aggregation, ApiClient, ApiSurface,
};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::models::{
    ApiResponse, MeteringPoint, MeteringPointCharges, MeteringPointDetail,
    MyEnergyDataMarketDocument, TimeSeriesResult,
};

/// Client for the customer surface, which exposes data owned by the
/// authenticated user.
#[derive(Debug, Clone)]
pub struct CustomerClient {
    core: ApiClient,
}

impl CustomerClient {
    /// Creates a client against the production API with default settings.
    ///
    /// # Arguments
    ///
    /// * `refresh_token` - Long-lived token issued on the Eloverblik portal
    ///
    /// # Errors
    ///
    /// Returns [`crate::EloverblikError::Http`] if the HTTP client cannot
    /// be built.
    pub fn new(refresh_token: impl Into<String>) -> Result<Self> {
        Self::with_config(refresh_token, ClientConfig::default())
    }

    /// Creates a client with an explicit configuration, e.g. a different
    /// base URL or timeout.
    pub fn with_config(refresh_token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        Ok(Self {
            core: ApiClient::new(ApiSurface::Customer, refresh_token.into(), config)?,
        })
    }

    /// Checks whether the customer API reports itself operational.
    pub async fn is_alive(&self) -> Result<bool> {
        let data = self
            .core
            .request_json(Method::GET, "api/isalive", None)
            .await?;
        Ok(data.as_bool().unwrap_or_else(|| envelope_result_bool(&data)))
    }

    /// Lists metering points for the authenticated user.
    ///
    /// # Arguments
    ///
    /// * `include_all` - When true, merges actively linked metering points
    ///   with non-linked points found in DataHub via CPR/CVR lookup
    pub async fn get_metering_points(&self, include_all: bool) -> Result<Vec<MeteringPoint>> {
        let path = format!(
            "api/meteringpoints/meteringpoints?includeAll={}",
            include_all
        );
        let data = self.core.request_json(Method::GET, &path, None).await?;
        let points: Vec<MeteringPoint> = envelope_result_list(data)?;
        tracing::debug!(count = points.len(), "Fetched metering points");
        Ok(points)
    }

    /// Adds a relation to a metering point using its web access code.
    ///
    /// # Arguments
    ///
    /// * `metering_point_id` - The metering point to link
    /// * `web_access_code` - Code provided by the data owner
    ///
    /// # Returns
    ///
    /// Whether the relation was accepted.
    pub async fn add_relation(
        &self,
        metering_point_id: &str,
        web_access_code: &str,
    ) -> Result<bool> {
        let path = format!(
            "api/meteringpoints/meteringpoint/relation/add/{}/{}",
            metering_point_id, web_access_code
        );
        let data = self.core.request_json(Method::PUT, &path, None).await?;
        let accepted = data.get("result").and_then(Value::as_str) == Some("Success");
        if accepted {
            tracing::info!(metering_point_id, "Added metering point relation");
        }
        Ok(accepted)
    }

    /// Adds relations for metering points registered to the authenticated
    /// CPR/CVR, without web access codes.
    ///
    /// # Returns
    ///
    /// One envelope per requested metering point; rejected points carry
    /// their error code and text instead of a result.
    pub async fn add_relations_by_cvr(
        &self,
        metering_point_ids: &[String],
    ) -> Result<Vec<ApiResponse<String>>> {
        let body = metering_points_body(metering_point_ids);
        let data = self
            .core
            .request_json(
                Method::POST,
                "api/meteringpoints/meteringpoint/relation/add",
                Some(&body),
            )
            .await?;
        envelope_result_list(data)
    }

    /// Deletes the relation to a metering point.
    ///
    /// # Returns
    ///
    /// Whether a relation was removed.
    pub async fn delete_relation(&self, metering_point_id: &str) -> Result<bool> {
        let path = format!(
            "api/meteringpoints/meteringpoint/relation/{}",
            metering_point_id
        );
        let data = self.core.request_json(Method::DELETE, &path, None).await?;
        let removed = envelope_result_bool(&data);
        if removed {
            tracing::info!(metering_point_id, "Deleted metering point relation");
        }
        Ok(removed)
    }

    /// Fetches detailed master data for the given metering points.
    ///
    /// Points the caller has no access to are omitted from the result.
    pub async fn get_details(
        &self,
        metering_point_ids: &[String],
    ) -> Result<Vec<MeteringPointDetail>> {
        let body = metering_points_body(metering_point_ids);
        let data = self
            .core
            .request_json(
                Method::POST,
                "api/meteringpoints/meteringpoint/getdetails",
                Some(&body),
            )
            .await?;
        let details: Vec<MeteringPointDetail> = envelope_nested_results(data)?;
        tracing::debug!(count = details.len(), "Fetched metering point details");
        Ok(details)
    }

    /// Fetches subscriptions, tariffs and fees for the given metering
    /// points.
    ///
    /// Returns charges linked now or in the future; the history of charge
    /// changes is not included.
    pub async fn get_charges(
        &self,
        metering_point_ids: &[String],
    ) -> Result<Vec<MeteringPointCharges>> {
        let body = metering_points_body(metering_point_ids);
        let data = self
            .core
            .request_json(
                Method::POST,
                "api/meteringpoints/meteringpoint/getcharges",
                Some(&body),
            )
            .await?;
        envelope_nested_results(data)
    }

    /// Exports master data for the given metering points as CSV.
    pub async fn export_metering_points(&self, metering_point_ids: &[String]) -> Result<String> {
        let body = metering_points_body(metering_point_ids);
        self.core
            .request_text(
                Method::POST,
                "api/meteringpoints/masterdata/export",
                Some(&body),
            )
            .await
    }

    /// Exports charges for the given metering points as CSV.
    pub async fn export_charges(&self, metering_point_ids: &[String]) -> Result<String> {
        let body = metering_points_body(metering_point_ids);
        self.core
            .request_text(
                Method::POST,
                "api/meteringpoints/charges/export",
                Some(&body),
            )
            .await
    }

    /// Exports time series for the given metering points as CSV.
    ///
    /// # Arguments
    ///
    /// * `metering_point_ids` - Metering points to export
    /// * `from_date` - Start date (inclusive)
    /// * `to_date` - End date (exclusive)
    /// * `aggregation` - Resolution of the exported values
    pub async fn export_time_series(
        &self,
        metering_point_ids: &[String],
        from_date: NaiveDate,
        to_date: NaiveDate,
        aggregation: Aggregation,
    ) -> Result<String> {
        let path = format!(
            "api/meterdata/timeseries/export/{}/{}/{}",
            from_date.format("%Y-%m-%d"),
            to_date.format("%Y-%m-%d"),
            aggregation.as_str()
        );
        let body = metering_points_body(metering_point_ids);
        let csv = self
            .core
            .request_text(Method::POST, &path, Some(&body))
            .await?;
        tracing::debug!(bytes = csv.len(), "Exported time series");
        Ok(csv)
    }

    /// Fetches time series for the given metering points.
    ///
    /// Data is only available for the previous 5 years plus the current
    /// year.
    ///
    /// # Arguments
    ///
    /// * `metering_point_ids` - Metering points to read
    /// * `from_date` - Start date (inclusive)
    /// * `to_date` - End date (exclusive)
    /// * `aggregation` - Resolution of the returned values
    ///
    /// # Returns
    ///
    /// One market document per metering point that returned data.
    pub async fn get_time_series(
        &self,
        metering_point_ids: &[String],
        from_date: NaiveDate,
        to_date: NaiveDate,
        aggregation: Aggregation,
    ) -> Result<Vec<MyEnergyDataMarketDocument>> {
        let path = format!(
            "api/meterdata/gettimeseries/{}/{}/{}",
            from_date.format("%Y-%m-%d"),
            to_date.format("%Y-%m-%d"),
            aggregation.as_str()
        );
        let body = metering_points_body(metering_point_ids);
        let data = self
            .core
            .request_json(Method::POST, &path, Some(&body))
            .await?;

        let results: Vec<TimeSeriesResult> = envelope_result_list(data)?;
        let documents: Vec<MyEnergyDataMarketDocument> = results
            .into_iter()
            .filter_map(|item| item.market_document)
            .collect();
        tracing::debug!(count = documents.len(), "Fetched time series documents");
        Ok(documents)
    }
}
