//! Third-party API surface for accessing data delegated by customers
//!
//! # Example
//!
//! ```rust,no_run
//! use eloverblik::{AuthorizationScope, ThirdPartyClient};
//!
//! # tokio_test::block_on(async {
//! let client = ThirdPartyClient::new("refresh-token").unwrap();
//! for auth in client.get_authorizations().await.unwrap() {
//!     let ids = client
//!         .get_metering_point_ids(
//!             AuthorizationScope::AuthorizationId,
//!             auth.authorization_id.as_deref().unwrap_or_default(),
//!         )
//!         .await
//!         .unwrap();
//!     println!("{:?}: {} metering points", auth.customer_name, ids.len());
//! }
//! # });
//! ```

use chrono::NaiveDate;
use reqwest::Method;

use super::{
    envelope_nested_results, envelope_result_bool, envelope_result_list, metering_points_body,
    Aggregation, ApiClient, ApiSurface, AuthorizationScope,
};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::models::{
    Authorization, MeteringPointCharges, MeteringPointDetail, MeteringPointThirdParty,
    MyEnergyDataMarketDocument, TimeSeriesResult,
};

/// Client for the third-party surface, which exposes data other customers
/// have delegated through powers of attorney.
#[derive(Debug, Clone)]
pub struct ThirdPartyClient {
    core: ApiClient,
}

impl ThirdPartyClient {
    /// Creates a client against the production API with default settings.
    ///
    /// # Arguments
    ///
    /// * `refresh_token` - Long-lived token issued for the third party
    ///
    /// # Errors
    ///
    /// Returns [`crate::EloverblikError::Http`] if the HTTP client cannot
    /// be built.
    pub fn new(refresh_token: impl Into<String>) -> Result<Self> {
        Self::with_config(refresh_token, ClientConfig::default())
    }

    /// Creates a client with an explicit configuration.
    pub fn with_config(refresh_token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        Ok(Self {
            core: ApiClient::new(ApiSurface::ThirdParty, refresh_token.into(), config)?,
        })
    }

    /// Checks whether the third-party API reports itself operational.
    pub async fn is_alive(&self) -> Result<bool> {
        let data = self
            .core
            .request_json(Method::GET, "api/isalive", None)
            .await?;
        Ok(data.as_bool().unwrap_or_else(|| envelope_result_bool(&data)))
    }

    /// Lists active authorizations granted by customers.
    ///
    /// Expired or deleted authorizations are not returned.
    pub async fn get_authorizations(&self) -> Result<Vec<Authorization>> {
        let data = self
            .core
            .request_json(Method::GET, "api/authorization/authorizations", None)
            .await?;
        let authorizations: Vec<Authorization> = envelope_result_list(data)?;
        tracing::debug!(count = authorizations.len(), "Fetched authorizations");
        Ok(authorizations)
    }

    /// Lists metering points covered by an authorization.
    ///
    /// # Arguments
    ///
    /// * `scope` - Which key to look the authorization up by
    /// * `identifier` - The id, CVR number or customer key value
    pub async fn get_metering_points(
        &self,
        scope: AuthorizationScope,
        identifier: &str,
    ) -> Result<Vec<MeteringPointThirdParty>> {
        let path = format!(
            "api/authorization/authorization/meteringpoints/{}/{}",
            scope.as_str(),
            identifier
        );
        let data = self.core.request_json(Method::GET, &path, None).await?;
        let points: Vec<MeteringPointThirdParty> = envelope_result_list(data)?;
        tracing::debug!(count = points.len(), "Fetched delegated metering points");
        Ok(points)
    }

    /// Lists only the ids of metering points covered by an authorization.
    ///
    /// # Arguments
    ///
    /// * `scope` - Which key to look the authorization up by
    /// * `identifier` - The id, CVR number or customer key value
    pub async fn get_metering_point_ids(
        &self,
        scope: AuthorizationScope,
        identifier: &str,
    ) -> Result<Vec<String>> {
        let path = format!(
            "api/authorization/authorization/meteringpointids/{}/{}",
            scope.as_str(),
            identifier
        );
        let data = self.core.request_json(Method::GET, &path, None).await?;
        envelope_result_list(data)
    }

    /// Fetches detailed master data for the given metering points.
    ///
    /// Points outside the caller's authorizations are omitted from the
    /// result.
    pub async fn get_details(
        &self,
        metering_point_ids: &[String],
    ) -> Result<Vec<MeteringPointDetail>> {
        let body = metering_points_body(metering_point_ids);
        let data = self
            .core
            .request_json(Method::POST, "api/meteringpoint/getdetails", Some(&body))
            .await?;
        envelope_nested_results(data)
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
            .request_json(Method::POST, "api/meteringpoint/getcharges", Some(&body))
            .await?;
        envelope_nested_results(data)
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
