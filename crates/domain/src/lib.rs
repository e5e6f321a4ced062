//! Camunda Deploy Domain - Core business types
//!
//! This crate defines the domain model for deploying resources to a
//! Camunda engine: endpoint and authentication settings, the deployment
//! request, and the classification of the server's deployment result.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod deployment;
pub mod endpoint;
pub mod error;

pub use auth::AuthConfig;
pub use deployment::{
    ArtifactKind, DeployedArtifact, DeploymentRequest, DeploymentResult, DeploymentSummary,
    Resource,
};
pub use endpoint::EndpointConfig;
pub use error::{DomainError, DomainResult};
