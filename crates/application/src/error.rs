//! Application error types

use camunda_deploy_domain::DomainError;
use thiserror::Error;

use crate::{ConfigError, DeploymentError};

/// Application-level errors.
///
/// None of these are recovered from locally; they end the invocation.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// The endpoint configuration is incomplete.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// The deployment failed.
    #[error("{0}")]
    Deployment(#[from] DeploymentError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
