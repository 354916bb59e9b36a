//! Filesystem store for compiled artifacts and deployment records.

use crate::{ArtifactError, ContractArtifact, Deployment};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Filesystem layout used by the deployment engine:
///
/// - `<artifacts_dir>/<Contract>.json` — compiled artifacts (read-only input)
/// - `<deployments_dir>/<network>/<Contract>.json` — deployment records
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    artifacts_dir: PathBuf,
    deployments_dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(artifacts_dir: impl Into<PathBuf>, deployments_dir: impl Into<PathBuf>) -> Self {
        Self {
            artifacts_dir: artifacts_dir.into(),
            deployments_dir: deployments_dir.into(),
        }
    }

    fn artifact_path(&self, name: &str) -> PathBuf {
        self.artifacts_dir.join(format!("{name}.json"))
    }

    fn deployment_path(&self, network: &str, name: &str) -> PathBuf {
        self.deployments_dir.join(network).join(format!("{name}.json"))
    }

    /// Load the compiled artifact for `name`.
    pub fn load_artifact(&self, name: &str) -> Result<ContractArtifact, ArtifactError> {
        let path = self.artifact_path(name);
        if !path.exists() {
            return Err(ArtifactError::MissingArtifact {
                name: name.to_string(),
                dir: self.artifacts_dir.clone(),
            });
        }
        let contents = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load the deployment record for `name` on `network`, if one exists.
    pub fn load_deployment(
        &self,
        network: &str,
        name: &str,
    ) -> Result<Option<Deployment>, ArtifactError> {
        let path = self.deployment_path(network, name);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Persist a deployment record, creating the network directory if needed.
    pub fn save_deployment(
        &self,
        network: &str,
        deployment: &Deployment,
    ) -> Result<(), ArtifactError> {
        let dir = self.deployments_dir.join(network);
        fs::create_dir_all(&dir)?;

        let path = dir.join(format!("{}.json", deployment.contract_name));
        let file = fs::File::create(&path)?;
        serde_json::to_writer_pretty(&file, deployment)?;

        debug!(path = %path.display(), "saved deployment record");
        Ok(())
    }
}
