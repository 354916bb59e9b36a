//! Provider-backed deployment engine.
//!
//! Sends creation transactions through an alloy provider and keeps one
//! deployment record per contract and network in the artifact store. A
//! record whose creation bytecode and constructor arguments match the
//! current request is reused instead of redeployed, which is what makes
//! re-running a deployment safe.

use crate::{DeployCall, Deployed, Deployments};
use alloy_network::TransactionBuilder;
use alloy_primitives::Bytes;
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use artifact::{ArtifactStore, Deployment};
use eyre::eyre;
use tracing::info;

/// Deployment engine bound to one network.
#[derive(Debug, Clone)]
pub struct DeploymentEngine<P> {
    provider: P,
    store: ArtifactStore,
    network: String,
}

impl<P> DeploymentEngine<P>
where
    P: Provider + Clone,
{
    pub fn new(provider: P, store: ArtifactStore, network: impl Into<String>) -> Self {
        Self {
            provider,
            store,
            network: network.into(),
        }
    }

    /// Network name records are stored under.
    pub fn network(&self) -> &str {
        &self.network
    }
}

impl<P> Deployments for DeploymentEngine<P>
where
    P: Provider + Clone + Send + Sync,
{
    async fn deploy(&self, name: &str, call: DeployCall) -> eyre::Result<Deployed> {
        let artifact = self.store.load_artifact(name)?;

        // An identical prior deployment is reused instead of redeployed.
        if let Some(existing) = self.store.load_deployment(&self.network, name)? {
            if existing.bytecode == artifact.bytecode && existing.args == call.args {
                if call.log {
                    info!(contract = name, address = %existing.address, "reusing existing deployment");
                }
                return Ok(Deployed {
                    deployment: existing,
                    newly_deployed: false,
                });
            }
        }

        if call.log {
            info!(contract = name, from = %call.from, "deploying");
        }

        let mut data = artifact.bytecode.to_vec();
        data.extend_from_slice(&call.args);
        let tx = TransactionRequest::default()
            .with_from(call.from)
            .with_deploy_code(Bytes::from(data));

        let pending = self.provider.send_transaction(tx).await?;
        let tx_hash = *pending.tx_hash();
        let receipt = pending
            .with_required_confirmations(call.wait_confirmations)
            .get_receipt()
            .await?;

        if !receipt.status() {
            eyre::bail!("deployment transaction {tx_hash} reverted");
        }
        let address = receipt
            .contract_address
            .ok_or_else(|| eyre!("no contract address in receipt for {tx_hash}"))?;

        let deployment = Deployment {
            contract_name: name.to_string(),
            address,
            abi: artifact.abi,
            transaction_hash: tx_hash,
            block_number: receipt.block_number,
            bytecode: artifact.bytecode,
            args: call.args,
            confirmations: call.wait_confirmations,
        };
        self.store.save_deployment(&self.network, &deployment)?;

        if call.log {
            info!(
                contract = name,
                address = %address,
                tx = %tx_hash,
                gas = receipt.gas_used,
                "deployed"
            );
        }

        Ok(Deployed {
            deployment,
            newly_deployed: true,
        })
    }

    async fn get(&self, name: &str) -> eyre::Result<Option<Deployment>> {
        Ok(self.store.load_deployment(&self.network, name)?)
    }
}
