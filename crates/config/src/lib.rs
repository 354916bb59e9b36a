//! Configuration types for the deployment tool.
//!
//! This crate provides:
//! - The per-chain parameter table, keyed by chain id
//! - The development-chain classification that decides mock provisioning
//! - Front-end export locations consumed by external tooling

pub mod network;

pub use network::{
    ConfigError, CoordinatorSource, FrontEndExport, NetworkConfig, NetworkRegistry,
    DEVELOPMENT_CHAINS, MOCK_BASE_FEE, MOCK_GAS_PRICE_LINK,
};
