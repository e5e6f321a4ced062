//! One deployment run, from arguments to summary.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use camunda_deploy_application::{
    DeployResources, DeployResourcesInput, EnvironmentSource, ResolveEndpointConfig,
};
use camunda_deploy_domain::{DeploymentRequest, DeploymentSummary, Resource};
use camunda_deploy_infrastructure::{ReqwestDeploymentClient, collect_resources};
use serde_json::json;

use crate::cli::Args;
use crate::output::{Marker, Reporter, bold};

/// Collects resources, resolves the endpoint, deploys and reports.
///
/// # Errors
///
/// Returns the first failure; nothing is retried.
pub async fn run(
    args: &Args,
    cwd: &Path,
    env: &impl EnvironmentSource,
    reporter: Reporter,
) -> anyhow::Result<DeploymentSummary> {
    let resources = collect_resources(cwd, &args.resources)?;
    let endpoint = ResolveEndpointConfig::new().execute(env)?;
    let request = build_request(args, resources);
    request.validate()?;

    let count = request.resources.len();
    reporter.log(
        Marker::Progress,
        &format!("preparing deployment ({count} resources)"),
        Some(&json!({
            "name": request.name,
            "tenantId": request.tenant_id,
            "source": request.source,
            "resources": request.resource_names().collect::<Vec<_>>(),
        })),
    );

    reporter.log(Marker::Progress, "deploying to Camunda", Some(&endpoint));

    let client = ReqwestDeploymentClient::new().context("failed to create HTTP client")?;
    let output = DeployResources::new(Arc::new(client))
        .execute(DeployResourcesInput { endpoint, request })
        .await?;

    let summary = output.summary;
    if summary.is_empty() {
        reporter.line(Marker::Done, &bold("no artifacts updated/added"));
    } else {
        let message = format!(
            "{} artifacts deployed ({} added, {} updated)",
            summary.total(),
            summary.created(),
            summary.updated()
        );
        reporter.log(Marker::Success, &bold(&message), Some(summary.artifacts()));
    }

    Ok(summary)
}

fn build_request(args: &Args, resources: Vec<Resource>) -> DeploymentRequest {
    DeploymentRequest {
        name: args.name.clone().unwrap_or_default(),
        tenant_id: args.tenant_id.clone(),
        source: args.source.clone(),
        resources,
    }
}
