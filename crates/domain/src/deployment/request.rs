//! Deployment request types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{DomainError, DomainResult};

/// A deployable file.
///
/// `name` is both the multipart field name and the artifact name the
/// engine records; `path` is where the content is read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Logical resource name
    pub name: String,
    /// Location on disk
    pub path: PathBuf,
}

impl Resource {
    /// Creates a new resource.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// A single deployment: a name, optional tenant and source, and the
/// resources to register under it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRequest {
    /// Deployment name
    pub name: String,
    /// Tenant to deploy to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// Deployment source label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Resources, unique by name
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl DeploymentRequest {
    /// Creates a deployment with the given name and no resources.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the tenant id.
    #[must_use]
    pub fn with_tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    /// Sets the deployment source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a resource, replacing any earlier resource with the same name.
    #[must_use]
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.add_resource(resource);
        self
    }

    /// Adds a resource in place. A resource with the same name is
    /// overwritten but keeps its position.
    pub fn add_resource(&mut self, resource: Resource) {
        if let Some(existing) = self.resources.iter_mut().find(|r| r.name == resource.name) {
            *existing = resource;
        } else {
            self.resources.push(resource);
        }
    }

    /// Tenant id, if set and non-empty.
    #[must_use]
    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref().filter(|t| !t.is_empty())
    }

    /// Deployment source, if set and non-empty.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref().filter(|s| !s.is_empty())
    }

    /// Names of all resources, in submission order.
    pub fn resource_names(&self) -> impl Iterator<Item = &str> {
        self.resources.iter().map(|r| r.name.as_str())
    }

    /// Checks the request can be submitted.
    ///
    /// An empty resource list is accepted; the engine decides whether
    /// that is an error.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyDeploymentName` if the name is empty and
    /// `DomainError::InvalidResource` if a resource has an empty name.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.is_empty() {
            return Err(DomainError::EmptyDeploymentName);
        }
        if let Some(resource) = self.resources.iter().find(|r| r.name.is_empty()) {
            return Err(DomainError::InvalidResource(format!(
                "empty name for {}",
                resource.path.display()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validate_requires_name() {
        assert_eq!(
            DeploymentRequest::new("").validate(),
            Err(DomainError::EmptyDeploymentName)
        );
        assert_eq!(DeploymentRequest::new("invoice").validate(), Ok(()));
    }

    #[test]
    fn test_validate_accepts_whitespace_name() {
        assert_eq!(DeploymentRequest::new("  ").validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_unnamed_resource() {
        let request = DeploymentRequest::new("invoice").with_resource(Resource::new("", "a.bpmn"));
        assert!(matches!(
            request.validate(),
            Err(DomainError::InvalidResource(_))
        ));
    }

    #[test]
    fn test_duplicate_resource_last_wins_in_place() {
        let request = DeploymentRequest::new("invoice")
            .with_resource(Resource::new("a.bpmn", "/one/a.bpmn"))
            .with_resource(Resource::new("b.dmn", "/one/b.dmn"))
            .with_resource(Resource::new("a.bpmn", "/two/a.bpmn"));

        assert_eq!(
            request.resources,
            vec![
                Resource::new("a.bpmn", "/two/a.bpmn"),
                Resource::new("b.dmn", "/one/b.dmn"),
            ]
        );
    }

    #[test]
    fn test_empty_optional_fields_are_absent() {
        let request = DeploymentRequest::new("invoice")
            .with_tenant_id("")
            .with_source("");
        assert_eq!(request.tenant_id(), None);
        assert_eq!(request.source(), None);

        let request = request.with_tenant_id("tenant-1").with_source("ci");
        assert_eq!(request.tenant_id(), Some("tenant-1"));
        assert_eq!(request.source(), Some("ci"));
    }
}
