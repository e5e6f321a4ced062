//! Use cases
//!
//! Each use case orchestrates domain types and ports for one operation.

mod deploy_resources;
mod resolve_endpoint;

pub use deploy_resources::{DeployResources, DeployResourcesInput, DeployResourcesOutput};
pub use resolve_endpoint::{
    AUTH_BEARER_VAR, AUTH_PASSWORD_VAR, AUTH_USERNAME_VAR, ConfigError, ENDPOINT_URL_VAR,
    ResolveEndpointConfig, resolve_endpoint_config,
};
