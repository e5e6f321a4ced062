//! Engine endpoint configuration

use serde::{Deserialize, Serialize};

use crate::{AuthConfig, DomainError, DomainResult};

/// Path of the deployment resource, relative to the engine REST root.
pub const DEPLOYMENT_CREATE_PATH: &str = "/deployment/create";

/// Where to deploy and how to authenticate.
///
/// Built once per invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    url: String,
    auth: AuthConfig,
}

impl EndpointConfig {
    /// Creates an endpoint configuration.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyEndpointUrl` if `url` is empty.
    pub fn new(url: impl Into<String>, auth: AuthConfig) -> DomainResult<Self> {
        let url = url.into();
        if url.is_empty() {
            return Err(DomainError::EmptyEndpointUrl);
        }
        Ok(Self { url, auth })
    }

    /// The engine REST root URL as configured.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The authentication mode.
    #[must_use]
    pub const fn auth(&self) -> &AuthConfig {
        &self.auth
    }

    /// Full URL of the deployment create resource.
    #[must_use]
    pub fn deployment_create_url(&self) -> String {
        let base = self.url.strip_suffix('/').unwrap_or(&self.url);
        format!("{base}{DEPLOYMENT_CREATE_PATH}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_url() {
        assert_eq!(
            EndpointConfig::new("", AuthConfig::None),
            Err(DomainError::EmptyEndpointUrl)
        );
    }

    #[test]
    fn test_whitespace_url_is_not_trimmed() {
        let endpoint = EndpointConfig::new(" ", AuthConfig::None).unwrap();
        assert_eq!(endpoint.url(), " ");
    }

    #[test]
    fn test_deployment_create_url() {
        let endpoint =
            EndpointConfig::new("http://localhost:8080/engine-rest", AuthConfig::None).unwrap();
        assert_eq!(
            endpoint.deployment_create_url(),
            "http://localhost:8080/engine-rest/deployment/create"
        );
    }

    #[test]
    fn test_trailing_slash_is_stripped_once() {
        let endpoint =
            EndpointConfig::new("http://localhost:8080/engine-rest/", AuthConfig::None).unwrap();
        assert_eq!(
            endpoint.deployment_create_url(),
            "http://localhost:8080/engine-rest/deployment/create"
        );
    }
}
