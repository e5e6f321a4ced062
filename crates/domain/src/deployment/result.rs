//! Deployment result as returned by the engine

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Artifact types reported in a deployment result.
///
/// Declaration order is the order artifacts are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArtifactKind {
    /// BPMN process definitions
    ProcessDefinitions,
    /// CMMN case definitions
    CaseDefinitions,
    /// DMN decision definitions
    DecisionDefinitions,
    /// DMN decision requirements definitions
    DecisionRequirementsDefinitions,
}

impl ArtifactKind {
    /// All kinds, in reporting order.
    pub const ALL: [Self; 4] = [
        Self::ProcessDefinitions,
        Self::CaseDefinitions,
        Self::DecisionDefinitions,
        Self::DecisionRequirementsDefinitions,
    ];

    /// Key under which the engine lists artifacts of this kind.
    #[must_use]
    pub const fn response_key(self) -> &'static str {
        match self {
            Self::ProcessDefinitions => "deployedProcessDefinitions",
            Self::CaseDefinitions => "deployedCaseDefinitions",
            Self::DecisionDefinitions => "deployedDecisionDefinitions",
            Self::DecisionRequirementsDefinitions => "deployedDecisionRequirementsDefinitions",
        }
    }

    /// Name used when reporting artifacts of this kind.
    #[must_use]
    pub const fn output_name(self) -> &'static str {
        match self {
            Self::ProcessDefinitions => "processDefinitions",
            Self::CaseDefinitions => "caseDefinitions",
            Self::DecisionDefinitions => "decisionDefinitions",
            Self::DecisionRequirementsDefinitions => "decisionRequirementsDefinitions",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.output_name())
    }
}

/// One deployed artifact, reduced to the fields worth reporting.
///
/// Field values are passed through as the engine sent them, whatever
/// their JSON type. Null and missing fields are both `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployedArtifact {
    /// Definition key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Value>,
    /// Resource the definition was parsed from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Value>,
    /// Engine-assigned version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,
    /// User-supplied version tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_tag: Option<Value>,
}

impl DeployedArtifact {
    /// Reads an artifact descriptor.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| value.get(name).filter(|v| !v.is_null()).cloned();
        Self {
            key: field("key"),
            resource: field("resource"),
            version: field("version"),
            version_tag: field("versionTag"),
        }
    }

    /// True if the engine created this artifact (numeric version 1).
    ///
    /// `1` and `1.0` both count. A missing or non-numeric version is not 1
    /// and therefore counts as an update.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_created(&self) -> bool {
        self.version.as_ref().and_then(Value::as_f64) == Some(1.0)
    }
}

/// The engine's answer to a successful deployment.
///
/// The body has no fixed schema, so it is kept as raw JSON and read
/// defensively. A success body that is not JSON is replaced by the HTTP
/// status text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DeploymentResult {
    /// Parsed JSON body
    Json(Value),
    /// Status text of a response whose body was not JSON
    Text(String),
}

impl DeploymentResult {
    /// Parses a success response body, falling back to `status_text`.
    #[must_use]
    pub fn from_body(body: &[u8], status_text: &str) -> Self {
        serde_json::from_slice::<Value>(body)
            .map_or_else(|_| Self::Text(status_text.to_string()), Self::Json)
    }

    /// True if the body was JSON.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    /// Top-level field of a JSON result.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Json(value) => value.get(key),
            Self::Text(_) => None,
        }
    }

    /// Deployment id assigned by the engine.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.get("id").and_then(Value::as_str)
    }

    /// Artifacts of one kind, in the order the engine listed them.
    ///
    /// A missing key or a value that is not an object yields nothing.
    #[must_use]
    pub fn artifacts(&self, kind: ArtifactKind) -> Vec<DeployedArtifact> {
        self.get(kind.response_key())
            .and_then(Value::as_object)
            .map(|defs| defs.values().map(DeployedArtifact::from_value).collect())
            .unwrap_or_default()
    }
}
