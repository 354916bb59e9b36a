//! Deployment artifact persistence.
//!
//! This crate provides the compiled-artifact and deployment-record types
//! shared by the deployment engine, plus a filesystem store following the
//! `deployments/<network>/<Contract>.json` layout. Records survive across
//! runs so an unchanged contract is never redeployed.

pub mod store;

pub use store::ArtifactStore;

use alloy_primitives::{Address, Bytes, TxHash};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtifactError {
    /// No compiled artifact exists for the requested contract name.
    #[error("no compiled artifact named {name} under {}", dir.display())]
    MissingArtifact { name: String, dir: PathBuf },

    /// Filesystem failure while reading or writing
    #[error("artifact io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed artifact or record JSON
    #[error("artifact json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Compiled contract artifact.
///
/// The subset of a compiler build artifact the deployment engine needs: the
/// name, the ABI (kept as raw JSON for downstream export) and the creation
/// bytecode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    /// Contract name as produced by the compiler
    pub contract_name: String,
    /// Contract ABI
    pub abi: serde_json::Value,
    /// Creation bytecode
    pub bytecode: Bytes,
}

/// Record of one completed deployment on one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    /// Contract name the record is saved under
    pub contract_name: String,
    /// Deployed contract address
    pub address: Address,
    /// Contract ABI
    pub abi: serde_json::Value,
    /// Hash of the creation transaction
    pub transaction_hash: TxHash,
    /// Block the creation transaction was included in
    pub block_number: Option<u64>,
    /// Creation bytecode the contract was deployed with
    pub bytecode: Bytes,
    /// ABI-encoded constructor arguments
    pub args: Bytes,
    /// Confirmations awaited before the deployment was considered complete
    pub confirmations: u64,
}
