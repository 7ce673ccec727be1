//! YAML configuration parser.
//!
//! Loads the RPC endpoint and the per-network contract deployment table
//! from a `chainbank.yaml` file. The client resolves the chain ID from the
//! connected node and looks the contract addresses up here, instead of
//! importing build-time deployment artifacts.

use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::chain::NetworkId;

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Deployed contract addresses for one network.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Deployment {
    /// Bank contract address, 0x-prefixed hex.
    pub bank: String,
    /// Token contract address, 0x-prefixed hex.
    pub token: String,
}

/// Client configuration parsed from YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// JSON-RPC endpoint of the node to connect to.
    pub rpc_url: String,
    /// Contract addresses keyed by numeric chain ID.
    #[serde(default)]
    pub deployments: BTreeMap<u64, Deployment>,
}

impl Config {
    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Look up the deployment for a network, if one is configured.
    pub fn deployment(&self, network: NetworkId) -> Option<&Deployment> {
        self.deployments.get(&network.as_u64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config_yaml() {
        let yaml = r#"
rpc_url: http://127.0.0.1:8545
deployments:
  31337:
    bank: "0x5FbDB2315678afecb367f032d93F642f64180aa3"
    token: "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512"
  11155111:
    bank: "0x1000000000000000000000000000000000000001"
    token: "0x1000000000000000000000000000000000000002"
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.rpc_url, "http://127.0.0.1:8545");
        assert_eq!(config.deployments.len(), 2);

        let local = config.deployment(NetworkId(31337)).unwrap();
        assert_eq!(local.bank, "0x5FbDB2315678afecb367f032d93F642f64180aa3");
    }

    #[test]
    fn parse_minimal_config() {
        let config = Config::from_yaml("rpc_url: http://localhost:8545\n").unwrap();
        assert!(config.deployments.is_empty());
    }

    #[test]
    fn unknown_network_has_no_deployment() {
        let config = Config::from_yaml("rpc_url: http://localhost:8545\n").unwrap();
        assert!(config.deployment(NetworkId(1)).is_none());
    }

    #[test]
    fn malformed_yaml_rejected() {
        let result = Config::from_yaml("rpc_url: [not, a, string");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
