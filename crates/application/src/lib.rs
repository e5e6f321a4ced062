//! Camunda Deploy Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for the engine endpoint and the environment)
//! - Use case orchestration (endpoint resolution, deployment)
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{DeploymentClient, DeploymentError, EnvironmentSource};
pub use use_cases::{
    ConfigError, DeployResources, DeployResourcesInput, DeployResourcesOutput,
    ResolveEndpointConfig, resolve_endpoint_config,
};
