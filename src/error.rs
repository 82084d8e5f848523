//! Error types for the Eloverblik client
//!
//! This module defines the error type shared by the token manager, the
//! request pipeline, and the endpoint facades, using `thiserror` for
//! ergonomic error handling.

use thiserror::Error;

/// Main error type for Eloverblik API operations
///
/// The first four variants mirror the failure kinds the API itself can
/// produce (rejected credential, throttling, server fault, application-level
/// envelope error); the remaining variants cover transport and decoding
/// failures on this side of the wire. Callers branch on the variant, never
/// on message text.
#[derive(Error, Debug)]
pub enum EloverblikError {
    /// Credential rejected during token exchange (non-retriable).
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// HTTP 429 from the API; backoff is left to the caller.
    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    /// HTTP 5xx, or a token exchange failure other than a rejected
    /// credential.
    #[error("Server error: {0}")]
    Server(String),

    /// Application-level failure: a `success: false` envelope, or a
    /// non-success HTTP status not covered by the variants above.
    #[error("{message}")]
    Api {
        /// Error code from the envelope, when one was supplied.
        code: Option<i32>,
        /// Human-readable message.
        message: String,
        /// Raw envelope or body text for diagnostics.
        body: Option<String>,
    },

    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for Eloverblik API operations
pub type Result<T> = std::result::Result<T, EloverblikError>;
