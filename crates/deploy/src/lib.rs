//! Deployment engine and deploy steps.
//!
//! The engine owns the project's deployment contract: named, idempotent,
//! confirmation-aware contract deployments recorded under
//! `deployments/<network>/`. Steps are small units of deployment work
//! selected by tag and run in declared order; [`mocks::DeployMocks`]
//! provisions the VRF coordinator mock on development chains.

pub mod engine;
pub mod mocks;
pub mod step;

pub use engine::DeploymentEngine;
pub use step::{run_steps, Context, Step, DEFAULT_WAIT_CONFIRMATIONS};

use alloy_primitives::{Address, Bytes};
use artifact::Deployment;
use std::future::Future;

/// Options for one named contract deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployCall {
    /// Account the creation transaction is sent from
    pub from: Address,
    /// ABI-encoded constructor arguments
    pub args: Bytes,
    /// Emit progress logs for this deployment
    pub log: bool,
    /// Confirmations to await before the deployment counts as complete
    pub wait_confirmations: u64,
}

/// Outcome of a [`Deployments::deploy`] call.
#[derive(Debug, Clone)]
pub struct Deployed {
    /// The stored record, freshly written or reused
    pub deployment: Deployment,
    /// False when an identical prior deployment was reused
    pub newly_deployed: bool,
}

/// Contract deployment service.
///
/// Implementations own idempotence (an identical already-deployed instance
/// is returned instead of redeployed) and the confirmation wait. Failures
/// propagate unmodified; callers are expected to re-run the whole deployment
/// rather than retry pieces of it.
pub trait Deployments: Send + Sync {
    /// Deploy the named contract, or return the existing identical
    /// deployment.
    fn deploy(
        &self,
        name: &str,
        call: DeployCall,
    ) -> impl Future<Output = eyre::Result<Deployed>> + Send;

    /// Fetch the stored deployment record for `name`, if any.
    fn get(&self, name: &str) -> impl Future<Output = eyre::Result<Option<Deployment>>> + Send;
}
