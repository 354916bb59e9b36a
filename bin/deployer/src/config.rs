use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Top-level deployer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Network to deploy to when none is given on the command line
    pub network: String,

    /// Directory holding compiled contract artifacts
    #[serde(default = "default_artifacts_dir")]
    pub artifacts_dir: PathBuf,

    /// Directory deployment records are written to
    #[serde(default = "default_deployments_dir")]
    pub deployments_dir: PathBuf,

    /// Per-network connection settings, keyed by network name
    pub networks: BTreeMap<String, NetworkSettings>,
}

/// Connection settings for one network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSettings {
    /// JSON-RPC endpoint url
    pub rpc_url: String,

    /// Confirmations to wait for on this network
    pub block_confirmations: Option<u64>,
}

fn default_artifacts_dir() -> PathBuf {
    PathBuf::from("artifacts")
}

fn default_deployments_dir() -> PathBuf {
    PathBuf::from("deployments")
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;

        Ok(config)
    }

    /// Settings for the named network, or an error naming what is missing.
    pub fn network_settings(&self, name: &str) -> eyre::Result<&NetworkSettings> {
        self.networks
            .get(name)
            .ok_or_else(|| eyre::eyre!("network {name} is not defined in the configuration file"))
    }
}
