//! Camunda Deploy Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus the resource discovery and
//! JSON output helpers used by the command line.

pub mod adapters;
pub mod auth;
pub mod http;
pub mod resources;
pub mod serialization;

pub use adapters::{DOTENV_FILE, DotenvError, ProcessEnvironment, ReqwestDeploymentClient};
pub use auth::{AUTHORIZATION, authorization_header};
pub use http::{BodyBuildError, DEPLOY_CHANGED_ONLY, build_deployment_form, deployment_fields};
pub use resources::{ResourceCollectionError, collect_resources, is_glob};
pub use serialization::{
    REDACTED_KEYS, REDACTED_VALUE, SerializationError, redact, to_json_pretty, to_json_redacted,
};
