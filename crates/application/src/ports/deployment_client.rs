//! Deployment client port
//!
//! Defines how a deployment reaches the engine and how it can fail.

use async_trait::async_trait;
use thiserror::Error;

use camunda_deploy_domain::{DeploymentRequest, DeploymentResult, EndpointConfig};

/// Errors that end a deployment.
///
/// Every variant carries the request that was being deployed so callers
/// can report what was attempted.
#[derive(Debug, Clone, Error)]
pub enum DeploymentError {
    /// The engine answered with a non-success status.
    #[error("{message}")]
    Rejected {
        /// Message from the response body, or the status text
        message: String,
        /// HTTP status code
        status: u16,
        /// HTTP status text (e.g., "Bad Request")
        status_text: String,
        /// URL the request was sent to
        url: String,
        /// The deployment that was rejected
        deployment: Box<DeploymentRequest>,
    },

    /// No HTTP response was received.
    #[error("{message}")]
    Transport {
        /// Transport error description
        message: String,
        /// URL the request was sent to
        url: String,
        /// The deployment that was attempted
        deployment: Box<DeploymentRequest>,
    },

    /// A resource file could not be read.
    #[error("failed to read resource {name} ({path}): {message}")]
    ResourceRead {
        /// Resource name
        name: String,
        /// Resource path
        path: String,
        /// I/O error description
        message: String,
        /// The deployment that was being prepared
        deployment: Box<DeploymentRequest>,
    },
}

impl DeploymentError {
    /// Human-readable failure message.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Rejected { message, .. } | Self::Transport { message, .. } => message.clone(),
            Self::ResourceRead { .. } => self.to_string(),
        }
    }

    /// HTTP status, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport { .. } | Self::ResourceRead { .. } => None,
        }
    }

    /// HTTP status text, if a response was received.
    #[must_use]
    pub fn status_text(&self) -> Option<&str> {
        match self {
            Self::Rejected { status_text, .. } => Some(status_text.as_str()),
            Self::Transport { .. } | Self::ResourceRead { .. } => None,
        }
    }

    /// URL the request was sent to, if it got that far.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Rejected { url, .. } | Self::Transport { url, .. } => Some(url.as_str()),
            Self::ResourceRead { .. } => None,
        }
    }

    /// The deployment that failed.
    #[must_use]
    pub fn deployment(&self) -> &DeploymentRequest {
        match self {
            Self::Rejected { deployment, .. }
            | Self::Transport { deployment, .. }
            | Self::ResourceRead { deployment, .. } => deployment.as_ref(),
        }
    }
}

/// Port for submitting deployments to the engine.
///
/// Implementations send exactly one request per call and never retry.
#[async_trait]
pub trait DeploymentClient: Send + Sync {
    /// Deploys `request` to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns `DeploymentError` if a resource cannot be read, the request
    /// cannot be sent, or the engine answers with a non-success status.
    async fn deploy(
        &self,
        endpoint: &EndpointConfig,
        request: &DeploymentRequest,
    ) -> Result<DeploymentResult, DeploymentError>;
}
