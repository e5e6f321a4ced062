//! Multipart body builder for deployment requests.
//!
//! Text fields come first, in a fixed order, followed by one file part per
//! resource.

use std::path::Path;

use camunda_deploy_domain::{DeploymentRequest, Resource};
use reqwest::multipart::{Form, Part};

/// Value of the `deploy-changed-only` field. The engine skips resources
/// identical to the ones already deployed.
pub const DEPLOY_CHANGED_ONLY: &str = "true";

/// Error type for body building operations.
#[derive(Debug, thiserror::Error)]
pub enum BodyBuildError {
    /// Failed to read a resource file.
    #[error("failed to read {name} ({}): {source}", path.display())]
    ResourceRead {
        /// Resource name
        name: String,
        /// Resource path
        path: std::path::PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A part could not be built.
    #[error("invalid part {name}: {message}")]
    InvalidPart {
        /// Resource name
        name: String,
        /// Error description
        message: String,
    },
}

/// Text fields of a deployment, in submission order.
///
/// `tenant-id` and `deployment-source` are only present when set and
/// non-empty.
#[must_use]
pub fn deployment_fields(request: &DeploymentRequest) -> Vec<(&'static str, String)> {
    let mut fields = vec![("deployment-name", request.name.clone())];

    if let Some(tenant_id) = request.tenant_id() {
        fields.push(("tenant-id", tenant_id.to_string()));
    }

    if let Some(source) = request.source() {
        fields.push(("deployment-source", source.to_string()));
    }

    fields.push(("deploy-changed-only", DEPLOY_CHANGED_ONLY.to_string()));
    fields
}

/// Build the multipart form for a deployment.
///
/// Resource files are read fully into memory.
///
/// # Errors
///
/// Returns an error if a resource file cannot be read.
pub async fn build_deployment_form(request: &DeploymentRequest) -> Result<Form, BodyBuildError> {
    let mut form = Form::new();

    for (name, value) in deployment_fields(request) {
        form = form.text(name, value);
    }

    for resource in &request.resources {
        let part = build_resource_part(resource).await?;
        form = form.part(resource.name.clone(), part);
    }

    Ok(form)
}

/// Build the file part of one resource. The resource name doubles as the
/// filename the engine stores the artifact under.
async fn build_resource_part(resource: &Resource) -> Result<Part, BodyBuildError> {
    let content = tokio::fs::read(&resource.path)
        .await
        .map_err(|source| BodyBuildError::ResourceRead {
            name: resource.name.clone(),
            path: resource.path.clone(),
            source,
        })?;

    tracing::debug!(
        resource = %resource.name,
        path = %resource.path.display(),
        bytes = content.len(),
        "read resource"
    );

    Part::bytes(content)
        .file_name(resource.name.clone())
        .mime_str(&mime_type(&resource.path))
        .map_err(|e| BodyBuildError::InvalidPart {
            name: resource.name.clone(),
            message: format!("Invalid MIME type: {e}"),
        })
}

fn mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}
