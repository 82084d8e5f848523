//! Access-token acquisition and caching
//!
//! Short-lived access tokens are obtained by presenting the long-lived
//! refresh token to a surface's token endpoint. Tokens are cached in process
//! memory until shortly before expiry. Concurrent refreshes are not
//! coordinated: overlapping callers may each fetch a token and the last
//! writer wins, which is harmless because every issued token is valid.

use std::sync::RwLock;
use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::error::{EloverblikError, Result};

/// Seconds before expiry at which a cached token is considered stale.
const EXPIRY_MARGIN_SECS: u64 = 60;

/// Envelope returned by the token endpoints.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    result: String,
}

/// The single JWT claim consulted when estimating token lifetime.
#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(default)]
    exp: f64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    expires_at: u64,
}

/// Caches short-lived access tokens and refreshes them on demand.
#[derive(Debug)]
pub(crate) struct TokenManager {
    refresh_token: String,
    token_url: String,
    http: Client,
    cached: RwLock<Option<CachedToken>>,
}

impl TokenManager {
    pub(crate) fn new(refresh_token: String, token_url: String, http: Client) -> Self {
        Self {
            refresh_token,
            token_url,
            http,
            cached: RwLock::new(None),
        }
    }

    /// Return a valid access token, exchanging the refresh token for a new
    /// one when the cache is empty or inside the expiry margin.
    pub(crate) async fn acquire(&self) -> Result<String> {
        if let Some(token) = self.fresh_cached_token() {
            tracing::debug!("Using cached access token");
            return Ok(token);
        }

        tracing::info!("Fetching new access token");
        let token = self.exchange().await?;
        let expires_at = decode_token_expiry(&token);

        if let Ok(mut guard) = self.cached.write() {
            *guard = Some(CachedToken {
                token: token.clone(),
                expires_at,
            });
        }

        Ok(token)
    }

    /// Drop the cached token so the next acquire fetches a fresh one.
    pub(crate) fn invalidate(&self) {
        if let Ok(mut guard) = self.cached.write() {
            *guard = None;
        }
        tracing::debug!("Invalidated cached access token");
    }

    fn fresh_cached_token(&self) -> Option<String> {
        if let Ok(guard) = self.cached.read() {
            if let Some(cached) = guard.as_ref() {
                if cached.expires_at > epoch_now() + EXPIRY_MARGIN_SECS {
                    return Some(cached.token.clone());
                }
                tracing::debug!("Cached access token expired, refreshing");
            }
        }
        None
    }

    async fn exchange(&self) -> Result<String> {
        let response = self
            .http
            .get(&self.token_url)
            .bearer_auth(&self.refresh_token)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| EloverblikError::Server(format!("Failed to get token: {}", e)))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(EloverblikError::Authentication(
                "Invalid refresh token".to_string(),
            ));
        }
        if !status.is_success() {
            return Err(EloverblikError::Server(format!(
                "Failed to get token: HTTP {}",
                status
            )));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| EloverblikError::Server(format!("Failed to get token: {}", e)))?;

        Ok(body.result)
    }

    #[cfg(test)]
    fn cache_for_test(&self, token: &str, expires_at: u64) {
        if let Ok(mut guard) = self.cached.write() {
            *guard = Some(CachedToken {
                token: token.to_string(),
                expires_at,
            });
        }
    }
}

/// Extract the `exp` claim (Unix seconds) from a JWT without verifying it.
///
/// Returns 0 when the token is not a decodable JWT, which marks it as
/// already expired and forces a refresh on the next acquire.
fn decode_token_expiry(token: &str) -> u64 {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next()) {
        (Some(_), Some(payload)) => payload,
        _ => return 0,
    };

    let decoded = match URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')) {
        Ok(bytes) => bytes,
        Err(_) => return 0,
    };

    match serde_json::from_slice::<Claims>(&decoded) {
        Ok(claims) => claims.exp as u64,
        Err(_) => 0,
    }
}

fn epoch_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_with_payload(payload: &[u8]) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        format!("{}.{}.signature", header, URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn test_decode_token_expiry_reads_exp_claim() {
        let token = jwt_with_payload(br#"{"exp": 9999999999, "sub": "customer"}"#);
        assert_eq!(decode_token_expiry(&token), 9999999999);
    }

    #[test]
    fn test_decode_token_expiry_accepts_fractional_exp() {
        let token = jwt_with_payload(br#"{"exp": 1893456000.5}"#);
        assert_eq!(decode_token_expiry(&token), 1893456000);
    }

    #[test]
    fn test_decode_token_expiry_handles_padded_segment() {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256"}"#);
        let padded = base64::engine::general_purpose::URL_SAFE.encode(br#"{"exp": 1700000000}"#);
        let token = format!("{}.{}.signature", header, padded);
        assert_eq!(decode_token_expiry(&token), 1700000000);
    }

    #[test]
    fn test_decode_token_expiry_missing_exp_is_zero() {
        let token = jwt_with_payload(br#"{"sub": "customer"}"#);
        assert_eq!(decode_token_expiry(&token), 0);
    }

    #[test]
    fn test_decode_token_expiry_opaque_token_is_zero() {
        assert_eq!(decode_token_expiry("not-a-jwt"), 0);
        assert_eq!(decode_token_expiry(""), 0);
    }

    #[test]
    fn test_decode_token_expiry_invalid_base64_is_zero() {
        assert_eq!(decode_token_expiry("header.%%%.signature"), 0);
    }

    #[test]
    fn test_decode_token_expiry_non_json_payload_is_zero() {
        let token = jwt_with_payload(b"plain text");
        assert_eq!(decode_token_expiry(&token), 0);
    }

    #[test]
    fn test_fresh_cached_token_honors_expiry_margin() {
        let manager = TokenManager::new(
            "refresh".to_string(),
            "http://localhost/customerapi/api/token".to_string(),
            Client::new(),
        );

        assert!(manager.fresh_cached_token().is_none());

        manager.cache_for_test("fresh-token", epoch_now() + 3600);
        assert_eq!(manager.fresh_cached_token().as_deref(), Some("fresh-token"));

        // Inside the 60s margin counts as expired.
        manager.cache_for_test("stale-token", epoch_now() + 30);
        assert!(manager.fresh_cached_token().is_none());
    }

    #[test]
    fn test_invalidate_clears_cache() {
        let manager = TokenManager::new(
            "refresh".to_string(),
            "http://localhost/customerapi/api/token".to_string(),
            Client::new(),
        );

        manager.cache_for_test("token", epoch_now() + 3600);
        manager.invalidate();
        assert!(manager.fresh_cached_token().is_none());
    }
}
