//! `Authorization` header values for each auth mode.

use base64::Engine;
use camunda_deploy_domain::AuthConfig;

/// Name of the header carrying credentials.
pub const AUTHORIZATION: &str = "Authorization";

/// Returns the `Authorization` header value for `auth`, or `None` when no
/// header must be sent.
#[must_use]
pub fn authorization_header(auth: &AuthConfig) -> Option<String> {
    match auth {
        AuthConfig::None => None,
        AuthConfig::Bearer { token } => Some(resolve_bearer(token)),
        AuthConfig::Basic { username, password } => Some(resolve_basic(username, password)),
    }
}

/// Resolve Bearer auth (simple token formatting).
fn resolve_bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Resolve Basic auth (base64 encoding).
fn resolve_basic(username: &str, password: &str) -> String {
    let credentials = format!("{username}:{password}");
    let encoded = base64::engine::general_purpose::STANDARD.encode(credentials.as_bytes());
    format!("Basic {encoded}")
}
