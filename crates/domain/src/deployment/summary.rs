//! Created/updated classification of a deployment result

use std::collections::BTreeMap;

use serde::Serialize;

use super::{ArtifactKind, DeployedArtifact, DeploymentResult};

/// Deployed artifacts grouped by kind, with created and updated totals.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DeploymentSummary {
    artifacts: BTreeMap<ArtifactKind, Vec<DeployedArtifact>>,
    created: usize,
    updated: usize,
}

impl DeploymentSummary {
    /// Classifies every artifact in `result`.
    ///
    /// Version 1 counts as created. Every other version, including a
    /// missing one, counts as updated. Kinds without artifacts are left out.
    #[must_use]
    pub fn classify(result: &DeploymentResult) -> Self {
        let mut summary = Self::default();

        for kind in ArtifactKind::ALL {
            let deployed = result.artifacts(kind);
            if deployed.is_empty() {
                continue;
            }

            let created = deployed.iter().filter(|a| a.is_created()).count();
            summary.created += created;
            summary.updated += deployed.len() - created;
            summary.artifacts.insert(kind, deployed);
        }

        summary
    }

    /// Artifacts by kind. Only non-empty kinds are present.
    #[must_use]
    pub const fn artifacts(&self) -> &BTreeMap<ArtifactKind, Vec<DeployedArtifact>> {
        &self.artifacts
    }

    /// Artifacts of one kind.
    #[must_use]
    pub fn of_kind(&self, kind: ArtifactKind) -> &[DeployedArtifact] {
        self.artifacts
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of newly created artifacts.
    #[must_use]
    pub const fn created(&self) -> usize {
        self.created
    }

    /// Number of updated artifacts.
    #[must_use]
    pub const fn updated(&self) -> usize {
        self.updated
    }

    /// Number of deployed artifacts.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.created + self.updated
    }

    /// True if nothing was created or updated.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
