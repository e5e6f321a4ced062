//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod deployment_client;
mod environment;

pub use deployment_client::{DeploymentClient, DeploymentError};
pub use environment::EnvironmentSource;
