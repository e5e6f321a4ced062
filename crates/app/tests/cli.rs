//! End-to-end tests of the `camunda-deploy` binary against a mock engine.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::Path;
use std::process::{Command, Output};

use serde_json::{Value, json};
use tempfile::{TempDir, tempdir};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENV_VARS: [&str; 4] = [
    "CAMUNDA_URL",
    "CAMUNDA_AUTH_USERNAME",
    "CAMUNDA_AUTH_PASSWORD",
    "CAMUNDA_AUTH_BEARER",
];

fn mixed_deployment() -> TempDir {
    let dir = tempdir().expect("Failed to create temp directory");
    std::fs::write(dir.path().join("invoice.bpmn"), "<bpmn/>").unwrap();
    std::fs::write(dir.path().join("approve.dmn"), "<dmn/>").unwrap();
    dir
}

/// Runs the binary in `cwd` on a blocking thread so the mock server keeps serving.
async fn camunda_deploy(cwd: &Path, url: Option<String>, args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_camunda-deploy"));
    command.current_dir(cwd).args(args).env("NO_COLOR", "1");
    for var in ENV_VARS {
        command.env_remove(var);
    }
    if let Some(url) = url {
        command.env("CAMUNDA_URL", url);
    }

    tokio::task::spawn_blocking(move || command.output().expect("Failed to run binary"))
        .await
        .unwrap()
}

async fn engine() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/engine-rest/deployment/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "d-1",
            "deployedProcessDefinitions": {
                "p": {
                    "key": "invoice",
                    "resource": "invoice.bpmn",
                    "version": 1,
                    "versionTag": null
                }
            },
            "deployedDecisionDefinitions": {
                "d": { "key": "approve", "resource": "approve.dmn", "version": 3 }
            }
        })))
        .mount(&server)
        .await;
    server
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[tokio::test]
async fn test_mixed_deployment_verbose() {
    let server = engine().await;
    let dir = mixed_deployment();
    let url = format!("{}/engine-rest", server.uri());

    let output = camunda_deploy(dir.path(), Some(url), &["-n", "test-1", "--verbose", "*"]).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let stdout = stdout(&output);
    assert!(stdout.contains("preparing deployment (2 resources)"));
    assert!(stdout.contains("deploying to Camunda"));
    assert!(stdout.contains("2 artifacts deployed (1 added, 1 updated)"));
    assert!(stdout.contains(r#"   "processDefinitions": ["#));
}

#[tokio::test]
async fn test_mixed_deployment_json() {
    let server = engine().await;
    let dir = mixed_deployment();
    let url = format!("{}/engine-rest", server.uri());

    let output = camunda_deploy(
        dir.path(),
        Some(url),
        &["-s", "node-app", "-n", "test-2", "--json", "*"],
    )
    .await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let result: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        result,
        json!({
            "processDefinitions": [
                { "key": "invoice", "resource": "invoice.bpmn", "version": 1 }
            ],
            "decisionDefinitions": [
                { "key": "approve", "resource": "approve.dmn", "version": 3 }
            ]
        })
    );
}

#[tokio::test]
async fn test_missing_name_fails() {
    let server = engine().await;
    let dir = mixed_deployment();

    let output = camunda_deploy(dir.path(), Some(server.uri()), &["--quite", "*"]).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("missing deployment name"));
}

#[tokio::test]
async fn test_tenant_quiet_prints_nothing() {
    let server = engine().await;
    let dir = mixed_deployment();
    let url = format!("{}/engine-rest", server.uri());

    let output = camunda_deploy(
        dir.path(),
        Some(url),
        &["-t", "1", "-n", "test-2", "--quiet", "*"],
    )
    .await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "");

    let received = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&received[0].body);
    assert!(body.contains(r#"name="tenant-id""#));
}

#[tokio::test]
async fn test_missing_env_json_prints_null() {
    let dir = mixed_deployment();

    let output = camunda_deploy(dir.path(), None, &["-n", "test-3", "--json", "*.bpmn"]).await;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output).trim(), "null");
    assert!(stderr(&output).contains("CAMUNDA_URL not configured"));
}

#[tokio::test]
async fn test_dotenv_supplies_endpoint() {
    let server = engine().await;
    let dir = mixed_deployment();
    std::fs::write(
        dir.path().join(".env"),
        format!("CAMUNDA_URL={}/engine-rest\n", server.uri()),
    )
    .unwrap();

    let output = camunda_deploy(dir.path(), None, &["-n", "test-4", "*.bpmn"]).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("2 artifacts deployed (1 added, 1 updated)"));
}

#[tokio::test]
async fn test_json_and_verbose_fail_with_null() {
    let dir = mixed_deployment();

    let output = camunda_deploy(dir.path(), None, &["-n", "x", "--json", "--verbose"]).await;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output).trim(), "null");
    assert!(stderr(&output).contains("--verbose and --json are exclusive"));
}
