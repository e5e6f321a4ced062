//! Authentication configuration types

use serde::{Deserialize, Serialize};

/// Authentication used when talking to the engine endpoint.
///
/// Exactly one mode is active. Header construction matches on this enum
/// exhaustively, so a new mode has to be handled wherever credentials are
/// applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthConfig {
    /// No authentication
    #[default]
    None,
    /// Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password, empty when not configured
        password: String,
    },
    /// Bearer token authentication
    Bearer {
        /// The bearer token
        token: String,
    },
}

impl AuthConfig {
    /// Creates a bearer token authentication.
    #[must_use]
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Creates a basic authentication.
    #[must_use]
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Short name of the mode, safe to log.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Basic { .. } => "basic",
            Self::Bearer { .. } => "bearer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_none() {
        let auth = AuthConfig::default();
        assert_eq!(auth.kind(), "none");
    }

    #[test]
    fn test_bearer_auth() {
        let auth = AuthConfig::bearer("my-token");
        let AuthConfig::Bearer { token } = auth else {
            unreachable!("Expected Bearer auth variant");
        };
        assert_eq!(token, "my-token");
    }

    #[test]
    fn test_basic_auth_serializes_tagged() {
        let auth = AuthConfig::basic("demo", "secret");
        let json = serde_json::to_value(&auth).unwrap_or_default();
        assert_eq!(json["type"], "basic");
        assert_eq!(json["username"], "demo");
        assert_eq!(json["password"], "secret");
    }

    #[test]
    fn test_none_serializes_type_only() {
        let json = serde_json::to_string(&AuthConfig::None).unwrap_or_default();
        assert_eq!(json, r#"{"type":"none"}"#);
    }
}
