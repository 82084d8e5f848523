use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use eloverblik::ClientConfig;

/// Builds an unsigned JWT whose payload carries the given expiry. The marker
/// keeps tokens distinguishable in authorization header matchers.
#[allow(dead_code)]
pub fn jwt_with_exp(exp: u64, marker: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let claims = format!(r#"{{"exp":{},"jti":"{}"}}"#, exp, marker);
    format!(
        "{}.{}.signature",
        header,
        URL_SAFE_NO_PAD.encode(claims.as_bytes())
    )
}

#[allow(dead_code)]
pub fn epoch_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before Unix epoch")
        .as_secs()
}

/// Client configuration pointed at a mock server.
#[allow(dead_code)]
pub fn mock_config(base_url: &str) -> ClientConfig {
    ClientConfig::new()
        .with_base_url(base_url)
        .with_timeout_secs(5)
}
