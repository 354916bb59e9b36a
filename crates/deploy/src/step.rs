//! Deployment steps and the runner that drives them.
//!
//! A step is one unit of deployment work. Steps carry tags so an operator
//! can run a subset of them, and every step sees the same [`Context`] with
//! the resolved chain, the signer address and the deployment backend.

use crate::Deployments;
use alloy_primitives::Address;
use async_trait::async_trait;
use config::NetworkRegistry;
use tracing::{debug, info};

/// Confirmations to wait for when the network does not configure its own.
pub const DEFAULT_WAIT_CONFIRMATIONS: u64 = 1;

/// Shared state handed to every step of a deployment run.
pub struct Context<D> {
    /// Chain id reported by the connected node.
    pub chain_id: u64,
    /// Name of the network the operator selected.
    pub chain_name: String,
    /// Address funding and signing the deployment transactions.
    pub deployer: Address,
    /// Per-chain configuration table.
    pub registry: NetworkRegistry,
    /// Backend that sends and records deployments.
    pub deployments: D,
    /// Confirmation override from the network settings.
    pub block_confirmations: Option<u64>,
}

impl<D> Context<D> {
    /// Confirmations to wait for, falling back to [`DEFAULT_WAIT_CONFIRMATIONS`].
    pub const fn confirmations(&self) -> u64 {
        match self.block_confirmations {
            Some(confirmations) => confirmations,
            None => DEFAULT_WAIT_CONFIRMATIONS,
        }
    }
}

/// One unit of deployment work.
#[async_trait]
pub trait Step<D: Deployments>: Send + Sync {
    /// Name used in logs and skip messages.
    fn name(&self) -> &'static str;

    /// Tags the step can be selected by.
    fn tags(&self) -> &'static [&'static str];

    async fn run(&self, ctx: &Context<D>) -> eyre::Result<()>;
}

fn is_selected(tags: &[&str], requested: &[String]) -> bool {
    requested.is_empty() || tags.iter().any(|tag| requested.iter().any(|req| req == tag))
}

/// Run every step whose tags match `requested`, in order, stopping at the
/// first failure. An empty `requested` list selects every step.
pub async fn run_steps<D: Deployments>(
    steps: &[Box<dyn Step<D>>],
    ctx: &Context<D>,
    requested: &[String],
) -> eyre::Result<()> {
    for step in steps {
        if !is_selected(step.tags(), requested) {
            debug!(step = step.name(), "skipping step, no matching tag");
            continue;
        }
        info!(step = step.name(), "running step");
        step.run(ctx).await?;
    }
    Ok(())
}
