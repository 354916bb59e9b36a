//! Per-chain deployment parameters.
//!
//! One table entry per supported chain id, the fixed set of chain names
//! treated as local development networks, and the front-end export locations
//! consumed by downstream tooling. The registry is built once at startup and
//! never mutated afterwards.

use alloy_primitives::{address, aliases::U96, b256, Address, B256, U256};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Flat fee the coordinator mock charges per randomness request, in juels
/// (0.25 LINK).
pub const MOCK_BASE_FEE: U96 = U96::from_limbs([250_000_000_000_000_000, 0]);

/// LINK per gas unit the coordinator mock uses to convert gas spent during
/// fulfillment into LINK owed.
pub const MOCK_GAS_PRICE_LINK: U96 = U96::from_limbs([1_000_000_000, 0]);

/// Chain names that refer to local, ephemeral networks. External
/// dependencies are deployed as mocks on these instead of being referenced
/// by a fixed address.
pub const DEVELOPMENT_CHAINS: &[&str] = &["hardhat", "localhost"];

/// Raffle entrance fee in wei (0.1 ether), shared by every current entry.
const ENTRANCE_FEE_WEI: U256 = U256::from_limbs([100_000_000_000_000_000, 0, 0, 0]);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The targeted chain has no entry in the network table.
    #[error("no network configuration for chain id {0}")]
    MissingNetworkConfig(u64),
}

/// How a chain satisfies the randomness-coordinator dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinatorSource {
    /// Use the coordinator contract the oracle operator maintains on this
    /// chain.
    External {
        /// VRF coordinator contract address
        coordinator: Address,
    },
    /// Deploy the coordinator mock locally with these constructor values.
    Mock {
        /// Flat fee per randomness request, in juels
        base_fee: U96,
        /// LINK per gas unit for fee accounting
        gas_price_link: U96,
    },
}

/// Deployment parameters for one supported chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Chain id (unique key)
    pub chain_id: u64,
    /// Chain name, used for development-chain membership tests
    pub name: String,
    /// Randomness-coordinator dependency for this chain
    pub vrf: CoordinatorSource,
    /// Raffle entrance fee in wei
    pub entrance_fee: U256,
    /// Gas lane key hash selecting the VRF configuration
    pub key_hash: B256,
    /// Pre-provisioned VRF subscription id, where the network has one
    pub subscription_id: Option<String>,
    /// Gas budget for the VRF fulfillment callback
    pub callback_gas_limit: u64,
    /// Seconds between upkeep cycles of the consuming contract
    pub interval: u64,
}

impl NetworkConfig {
    /// Rinkeby testnet entry.
    pub fn rinkeby() -> Self {
        Self {
            chain_id: 4,
            name: "rinkeby".to_string(),
            vrf: CoordinatorSource::External {
                // https://docs.chain.link/vrf/v2/subscription/supported-networks
                coordinator: address!("0x6168499c0cFfCaCD319c818142124B7A15E857ab"),
            },
            entrance_fee: ENTRANCE_FEE_WEI,
            key_hash: b256!("0xd89b2bf150e3b9e13446986e571fb9cab24b13cea0a43ea20a6049a85cc807cc"),
            subscription_id: Some("9112".to_string()),
            callback_gas_limit: 500_000,
            interval: 30,
        }
    }

    /// Local hardhat chain entry. No live coordinator exists here, so the
    /// mock is deployed instead.
    pub fn hardhat() -> Self {
        Self {
            chain_id: 31337,
            name: "hardhat".to_string(),
            vrf: CoordinatorSource::Mock {
                base_fee: MOCK_BASE_FEE,
                gas_price_link: MOCK_GAS_PRICE_LINK,
            },
            entrance_fee: ENTRANCE_FEE_WEI,
            key_hash: b256!("0xd89b2bf150e3b9e13446986e571fb9cab24b13cea0a43ea20a6049a85cc807cc"),
            subscription_id: None,
            callback_gas_limit: 1_000_000,
            interval: 30,
        }
    }
}

/// Filesystem locations where deployed addresses and the ABI are exported
/// for the front end. Informational only; the export itself is done by
/// external tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontEndExport {
    /// JSON file mapping chain id to deployed contract addresses
    pub addresses_path: PathBuf,
    /// JSON file holding the contract ABI
    pub abi_path: PathBuf,
}

impl Default for FrontEndExport {
    fn default() -> Self {
        Self {
            addresses_path: PathBuf::from(
                "../nextjs-smartcontract-lottery/constants/contractAddresses.json",
            ),
            abi_path: PathBuf::from("../nextjs-smartcontract-lottery/constants/abi.json"),
        }
    }
}

/// Immutable registry of per-chain deployment parameters.
///
/// Constructed once at process start and passed explicitly into whatever
/// needs per-chain values, so callers can inject synthetic registries in
/// tests instead of reaching for ambient state.
#[derive(Debug, Clone)]
pub struct NetworkRegistry {
    entries: Vec<NetworkConfig>,
    development_chains: Vec<String>,
    front_end: FrontEndExport,
}

impl NetworkRegistry {
    /// Registry preloaded with the project's supported networks.
    pub fn builtin() -> Self {
        Self::new(
            vec![NetworkConfig::rinkeby(), NetworkConfig::hardhat()],
            DEVELOPMENT_CHAINS.iter().map(|s| s.to_string()).collect(),
        )
    }

    /// Build a registry from explicit entries and development-chain names.
    pub fn new(entries: Vec<NetworkConfig>, development_chains: Vec<String>) -> Self {
        Self {
            entries,
            development_chains,
            front_end: FrontEndExport::default(),
        }
    }

    /// Override the front-end export locations.
    pub fn with_front_end_export(mut self, front_end: FrontEndExport) -> Self {
        self.front_end = front_end;
        self
    }

    /// Look up the entry for a chain id.
    ///
    /// Absence is a configuration authoring error, never a silent default.
    pub fn lookup(&self, chain_id: u64) -> Result<&NetworkConfig, ConfigError> {
        self.entries
            .iter()
            .find(|entry| entry.chain_id == chain_id)
            .ok_or(ConfigError::MissingNetworkConfig(chain_id))
    }

    /// Whether `name` refers to a local development chain.
    ///
    /// Unknown names count as live networks, so mock provisioning is skipped
    /// rather than attempted somewhere it was never configured to run.
    pub fn is_development_chain(&self, name: &str) -> bool {
        self.development_chains.iter().any(|dev| dev == name)
    }

    /// All registered entries.
    pub fn entries(&self) -> &[NetworkConfig] {
        &self.entries
    }

    /// Front-end export locations for downstream tooling.
    pub const fn front_end_export(&self) -> &FrontEndExport {
        &self.front_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_round_trips_every_entry() {
        let registry = NetworkRegistry::builtin();
        for entry in registry.entries() {
            let found = registry.lookup(entry.chain_id).unwrap();
            assert_eq!(found.chain_id, entry.chain_id);
            assert_eq!(found, entry);
        }
    }

    #[test]
    fn test_lookup_unknown_chain_is_an_error() {
        let registry = NetworkRegistry::builtin();
        assert_eq!(
            registry.lookup(137).unwrap_err(),
            ConfigError::MissingNetworkConfig(137)
        );
    }

    #[test]
    fn test_development_chain_membership() {
        let registry = NetworkRegistry::builtin();
        assert!(registry.is_development_chain("hardhat"));
        assert!(registry.is_development_chain("localhost"));
        assert!(!registry.is_development_chain("rinkeby"));
        assert!(!registry.is_development_chain("mainnet"));
        assert!(!registry.is_development_chain(""));
    }

    #[test]
    fn test_rinkeby_entry() {
        let config = NetworkConfig::rinkeby();
        assert_eq!(config.chain_id, 4);
        assert_eq!(config.name, "rinkeby");
        assert_eq!(
            config.vrf,
            CoordinatorSource::External {
                coordinator: address!("0x6168499c0cFfCaCD319c818142124B7A15E857ab"),
            }
        );
        assert_eq!(config.entrance_fee, U256::from(100_000_000_000_000_000u64));
        assert_eq!(config.subscription_id.as_deref(), Some("9112"));
        assert_eq!(config.callback_gas_limit, 500_000);
        assert_eq!(config.interval, 30);
    }

    #[test]
    fn test_hardhat_entry_deploys_the_mock() {
        let config = NetworkConfig::hardhat();
        assert_eq!(config.chain_id, 31337);
        assert_eq!(
            config.vrf,
            CoordinatorSource::Mock {
                base_fee: U96::from(250_000_000_000_000_000u64),
                gas_price_link: U96::from(1_000_000_000u64),
            }
        );
        assert_eq!(config.subscription_id, None);
        assert_eq!(config.callback_gas_limit, 1_000_000);
    }

    #[test]
    fn test_injected_registry() {
        let custom = NetworkConfig {
            chain_id: 1337,
            name: "devnet".to_string(),
            vrf: CoordinatorSource::Mock {
                base_fee: MOCK_BASE_FEE,
                gas_price_link: MOCK_GAS_PRICE_LINK,
            },
            entrance_fee: U256::from(1u64),
            key_hash: B256::ZERO,
            subscription_id: None,
            callback_gas_limit: 100_000,
            interval: 10,
        };
        let registry = NetworkRegistry::new(vec![custom], vec!["devnet".to_string()]);

        assert!(registry.is_development_chain("devnet"));
        assert!(!registry.is_development_chain("hardhat"));
        assert_eq!(registry.lookup(1337).unwrap().name, "devnet");
        assert!(registry.lookup(31337).is_err());
    }

    #[test]
    fn test_front_end_export_defaults() {
        let registry = NetworkRegistry::builtin();
        let export = registry.front_end_export();
        assert_eq!(
            export.addresses_path,
            PathBuf::from("../nextjs-smartcontract-lottery/constants/contractAddresses.json")
        );
        assert_eq!(
            export.abi_path,
            PathBuf::from("../nextjs-smartcontract-lottery/constants/abi.json")
        );
    }
}
