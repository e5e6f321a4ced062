//! Resolve endpoint configuration use case.

use std::collections::HashMap;

use camunda_deploy_domain::{AuthConfig, EndpointConfig};
use thiserror::Error;

use crate::ports::EnvironmentSource;

/// Engine REST root URL.
pub const ENDPOINT_URL_VAR: &str = "CAMUNDA_URL";
/// Basic auth username.
pub const AUTH_USERNAME_VAR: &str = "CAMUNDA_AUTH_USERNAME";
/// Basic auth password.
pub const AUTH_PASSWORD_VAR: &str = "CAMUNDA_AUTH_PASSWORD";
/// Bearer token.
pub const AUTH_BEARER_VAR: &str = "CAMUNDA_AUTH_BEARER";

/// Errors in the endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The endpoint URL variable is missing or empty.
    #[error("{variable} not configured, please specify it via environment variable")]
    MissingEndpointUrl {
        /// Name of the variable
        variable: &'static str,
    },
}

const MISSING_URL: ConfigError = ConfigError::MissingEndpointUrl {
    variable: ENDPOINT_URL_VAR,
};

/// Use case for building the `EndpointConfig` from environment variables.
///
/// Auth mode is picked in priority order: a non-empty username selects
/// basic auth (password defaults to empty), otherwise a non-empty bearer
/// token selects bearer auth, otherwise no auth.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveEndpointConfig;

impl ResolveEndpointConfig {
    /// Creates a new `ResolveEndpointConfig` use case.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Resolves the endpoint configuration from `env`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEndpointUrl` if the URL variable is
    /// absent or empty.
    pub fn execute(&self, env: &impl EnvironmentSource) -> Result<EndpointConfig, ConfigError> {
        let Some(url) = env.non_empty_var(ENDPOINT_URL_VAR) else {
            return Err(MISSING_URL);
        };

        let auth = if let Some(username) = env.non_empty_var(AUTH_USERNAME_VAR) {
            AuthConfig::Basic {
                username,
                password: env.var(AUTH_PASSWORD_VAR).unwrap_or_default(),
            }
        } else if let Some(token) = env.non_empty_var(AUTH_BEARER_VAR) {
            AuthConfig::Bearer { token }
        } else {
            AuthConfig::None
        };

        tracing::debug!(url = %url, auth = auth.kind(), "resolved endpoint configuration");

        EndpointConfig::new(url, auth).map_err(|_| MISSING_URL)
    }
}

/// Resolves the endpoint configuration from a variable map.
///
/// # Errors
///
/// Returns `ConfigError::MissingEndpointUrl` if the URL variable is
/// absent or empty.
pub fn resolve_endpoint_config(
    env: &HashMap<String, String>,
) -> Result<EndpointConfig, ConfigError> {
    ResolveEndpointConfig::new().execute(env)
}
