//! Deploy resources use case.

use std::sync::Arc;

use camunda_deploy_domain::{
    DeploymentRequest, DeploymentResult, DeploymentSummary, EndpointConfig,
};

use crate::ApplicationResult;
use crate::ports::DeploymentClient;

/// Input for a deployment.
#[derive(Debug, Clone)]
pub struct DeployResourcesInput {
    /// Where to deploy.
    pub endpoint: EndpointConfig,
    /// What to deploy.
    pub request: DeploymentRequest,
}

/// Output of a successful deployment.
#[derive(Debug, Clone)]
pub struct DeployResourcesOutput {
    /// The engine's raw answer.
    pub result: DeploymentResult,
    /// Created/updated classification of `result`.
    pub summary: DeploymentSummary,
}

/// Use case for deploying a set of resources in one request.
///
/// # Example
///
/// ```ignore
/// let client = ReqwestDeploymentClient::new()?;
/// let use_case = DeployResources::new(Arc::new(client));
///
/// let output = use_case.execute(DeployResourcesInput { endpoint, request }).await?;
/// println!("{} added, {} updated", output.summary.created(), output.summary.updated());
/// ```
pub struct DeployResources<C: DeploymentClient> {
    client: Arc<C>,
}

impl<C: DeploymentClient> DeployResources<C> {
    /// Creates a new `DeployResources` use case with the given client.
    pub const fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Validates the request, submits it once and classifies the result.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Domain` if the request is invalid and
    /// `ApplicationError::Deployment` if the deployment fails.
    pub async fn execute(
        &self,
        input: DeployResourcesInput,
    ) -> ApplicationResult<DeployResourcesOutput> {
        let DeployResourcesInput { endpoint, request } = input;

        request.validate()?;

        tracing::info!(
            deployment = %request.name,
            resources = request.resources.len(),
            url = %endpoint.deployment_create_url(),
            "submitting deployment"
        );

        let result = self.client.deploy(&endpoint, &request).await?;
        let summary = DeploymentSummary::classify(&result);

        tracing::info!(
            deployment = %request.name,
            id = result.id().unwrap_or("-"),
            created = summary.created(),
            updated = summary.updated(),
            "deployment finished"
        );

        Ok(DeployResourcesOutput { result, summary })
    }
}
