//! HTTP request construction for deployments.

mod body_builder;

pub use body_builder::{
    BodyBuildError, DEPLOY_CHANGED_ONLY, build_deployment_form, deployment_fields,
};
