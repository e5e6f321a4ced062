//! Deployment client implementation using reqwest.
//!
//! This adapter implements the `DeploymentClient` port. It builds the
//! multipart body, applies credentials, sends a single POST and turns the
//! response into a `DeploymentResult` or a `DeploymentError`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;

use camunda_deploy_application::ports::{DeploymentClient, DeploymentError};
use camunda_deploy_domain::{DeploymentRequest, DeploymentResult, EndpointConfig};

use crate::auth::{AUTHORIZATION, authorization_header};
use crate::http::{BodyBuildError, build_deployment_form};

/// Deployment client using reqwest.
///
/// No retries and no timeout beyond the transport defaults.
pub struct ReqwestDeploymentClient {
    client: Client,
}

impl ReqwestDeploymentClient {
    /// Creates a new deployment client with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("camunda-deploy/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    /// Status line text, e.g. "Bad Request".
    fn status_text(status: StatusCode) -> String {
        status
            .canonical_reason()
            .map_or_else(|| status.as_str().to_string(), String::from)
    }

    /// Extracts the `message` field of a JSON error body.
    fn error_message(body: &[u8]) -> Option<String> {
        serde_json::from_slice::<Value>(body)
            .ok()?
            .get("message")?
            .as_str()
            .map(String::from)
    }

    /// Maps a body building failure to a deployment error.
    fn map_body_error(error: BodyBuildError, request: &DeploymentRequest) -> DeploymentError {
        let (name, path, message) = match error {
            BodyBuildError::ResourceRead { name, path, source } => {
                (name, path.display().to_string(), source.to_string())
            }
            BodyBuildError::InvalidPart { name, message } => {
                let path = request
                    .resources
                    .iter()
                    .find(|r| r.name == name)
                    .map(|r| r.path.display().to_string())
                    .unwrap_or_default();
                (name, path, message)
            }
        };

        DeploymentError::ResourceRead {
            name,
            path,
            message,
            deployment: Box::new(request.clone()),
        }
    }

    fn transport_error(
        message: impl Into<String>,
        url: &str,
        request: &DeploymentRequest,
    ) -> DeploymentError {
        DeploymentError::Transport {
            message: message.into(),
            url: url.to_string(),
            deployment: Box::new(request.clone()),
        }
    }
}

#[async_trait]
impl DeploymentClient for ReqwestDeploymentClient {
    async fn deploy(
        &self,
        endpoint: &EndpointConfig,
        request: &DeploymentRequest,
    ) -> Result<DeploymentResult, DeploymentError> {
        let url = endpoint.deployment_create_url();
        let parsed_url = Url::parse(&url)
            .map_err(|e| Self::transport_error(format!("invalid URL {url}: {e}"), &url, request))?;

        let form = build_deployment_form(request)
            .await
            .map_err(|e| Self::map_body_error(e, request))?;

        let mut builder = self.client.post(parsed_url).multipart(form);
        if let Some(value) = authorization_header(endpoint.auth()) {
            builder = builder.header(AUTHORIZATION, value);
        }

        tracing::debug!(
            url = %url,
            auth = endpoint.auth().kind(),
            resources = request.resources.len(),
            "sending deployment request"
        );

        let response = builder
            .send()
            .await
            .map_err(|e| Self::transport_error(e.to_string(), &url, request))?;

        let status = response.status();
        let status_text = Self::status_text(status);
        let response_url = response.url().to_string();

        tracing::debug!(status = status.as_u16(), "received deployment response");

        if !status.is_success() {
            // An unreadable error body falls back to the status text like a non-JSON one.
            let body = response.bytes().await.unwrap_or_default();
            let message = Self::error_message(&body).unwrap_or_else(|| status_text.clone());

            return Err(DeploymentError::Rejected {
                message,
                status: status.as_u16(),
                status_text,
                url: response_url,
                deployment: Box::new(request.clone()),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            Self::transport_error(format!("failed to read body: {e}"), &response_url, request)
        })?;

        let result = DeploymentResult::from_body(&body, &status_text);
        if !result.is_json() {
            tracing::warn!(
                status = status.as_u16(),
                "deployment response is not JSON, using status text as result"
            );
        }

        Ok(result)
    }
}
