//! Eloverblik - Typed async client for the Danish Eloverblik metering data API
//!
//! This library provides typed access to both Eloverblik API surfaces: the
//! customer API for reading your own metering data and the third-party API
//! for reading data that customers have delegated through powers of attorney.
//! Access-token exchange, caching and the retry after an expired token are
//! handled internally; callers only ever supply the long-lived refresh token.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `client`: Request pipeline and the `CustomerClient` / `ThirdPartyClient` facades
//! - `models`: Wire types for metering points, charges, time series and authorizations
//! - `config`: Base URL and timeout configuration
//! - `error`: Error types and result alias
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use eloverblik::{Aggregation, CustomerClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = CustomerClient::new("refresh-token")?;
//!
//!     let points = client.get_metering_points(false).await?;
//!     let ids: Vec<String> = points
//!         .iter()
//!         .filter_map(|point| point.base.metering_point_id.clone())
//!         .collect();
//!
//!     let documents = client
//!         .get_time_series(
//!             &ids,
//!             NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!             NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
//!             Aggregation::Hour,
//!         )
//!         .await?;
//!     println!("Fetched {} documents", documents.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;

mod token;

// Re-export commonly used types
pub use client::{Aggregation, AuthorizationScope, CustomerClient, ThirdPartyClient};
pub use config::ClientConfig;
pub use error::{EloverblikError, Result};
