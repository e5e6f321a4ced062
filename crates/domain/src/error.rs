//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The endpoint URL is empty.
    #[error("endpoint URL must not be empty")]
    EmptyEndpointUrl,

    /// The deployment has no name.
    #[error("missing deployment name")]
    EmptyDeploymentName,

    /// A resource has no name.
    #[error("invalid resource: {0}")]
    InvalidResource(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
