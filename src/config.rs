//! Client configuration for the Eloverblik API.
//!
//! This module provides the configuration struct shared by both API
//! surfaces, with defaults matching the public production endpoint.
//!
//! # Example
//!
//! ```rust
//! use eloverblik::config::ClientConfig;
//!
//! // Production defaults
//! let config = ClientConfig::new();
//! assert_eq!(config.base_url, "https://api.eloverblik.dk");
//!
//! // Pointed at a local mock for tests
//! let test_config = ClientConfig::new()
//!     .with_base_url("http://localhost:8080")
//!     .with_timeout_secs(5);
//! assert_eq!(config.timeout_secs, 120);
//! assert_eq!(test_config.timeout_secs, 5);
//! ```

use serde::{Deserialize, Serialize};

/// Base URL of the public Eloverblik API.
pub const DEFAULT_BASE_URL: &str = "https://api.eloverblik.dk";

/// Default overall per-call deadline, in seconds.
///
/// The API can be slow on large time-series requests, hence the generous
/// default.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Eloverblik API client configuration.
///
/// Applies to both the customer and third-party surfaces. The credential
/// (refresh token) is deliberately not part of the configuration; it is
/// passed to the client constructors directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds, applied uniformly to every HTTP call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration with production defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom base URL.
    ///
    /// Useful for tests and local mocks. A trailing slash is trimmed so
    /// path concatenation stays predictable.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eloverblik::config::ClientConfig;
    ///
    /// let config = ClientConfig::new().with_base_url("http://localhost:8080/");
    /// assert_eq!(config.base_url, "http://localhost:8080");
    /// ```
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the per-call timeout in seconds.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `ELOVERBLIK_API_URL` - Base URL (default: https://api.eloverblik.dk)
    /// * `ELOVERBLIK_TIMEOUT_SECS` - Request timeout in seconds (default: 120)
    ///
    /// Unset or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("ELOVERBLIK_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = std::env::var("ELOVERBLIK_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::default()
            .with_base_url(&base_url)
            .with_timeout_secs(timeout_secs)
    }
}
