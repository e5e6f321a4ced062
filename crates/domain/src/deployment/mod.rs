//! Deployment request and result types

mod request;
mod result;
mod summary;

pub use request::{DeploymentRequest, Resource};
pub use result::{ArtifactKind, DeployedArtifact, DeploymentResult};
pub use summary::DeploymentSummary;
