//! Mock infrastructure deployment for development chains.
//!
//! Live networks have a real VRF coordinator, so this step only acts on
//! chains the registry classifies as development. There it deploys
//! `VRFCoordinatorV2Mock` with the fixed base fee and LINK-per-gas price
//! the rest of the tooling assumes.

use crate::step::{Context, Step};
use crate::{DeployCall, Deployments};
use alloy_sol_types::SolConstructor;
use async_trait::async_trait;
use binding::vrf::VRFCoordinatorV2Mock;
use config::{MOCK_BASE_FEE, MOCK_GAS_PRICE_LINK};
use tracing::{debug, info};

/// Contract name the mock coordinator is compiled and recorded under.
pub const MOCK_CONTRACT: &str = "VRFCoordinatorV2Mock";

/// Deploys the mock VRF coordinator on development chains.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeployMocks;

#[async_trait]
impl<D: Deployments> Step<D> for DeployMocks {
    fn name(&self) -> &'static str {
        "deploy-mocks"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["all", "mocks"]
    }

    async fn run(&self, ctx: &Context<D>) -> eyre::Result<()> {
        if !ctx.registry.is_development_chain(&ctx.chain_name) {
            debug!(network = %ctx.chain_name, "live network, skipping mock deployment");
            return Ok(());
        }

        info!("Local network detected! Deploying mocks...");
        let args = VRFCoordinatorV2Mock::constructorCall {
            _baseFee: MOCK_BASE_FEE,
            _gasPriceLink: MOCK_GAS_PRICE_LINK,
        }
        .abi_encode();

        ctx.deployments
            .deploy(
                MOCK_CONTRACT,
                DeployCall {
                    from: ctx.deployer,
                    args: args.into(),
                    log: true,
                    wait_confirmations: ctx.confirmations(),
                },
            )
            .await?;

        info!("Mocks Deployed!");
        info!("----------------------------------------------------");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::DEFAULT_WAIT_CONFIRMATIONS;
    use crate::Deployed;
    use alloy_primitives::{aliases::U96, Address, Bytes, TxHash};
    use alloy_sol_types::SolValue;
    use artifact::Deployment;
    use config::NetworkRegistry;
    use std::sync::Mutex;

    /// In-memory backend that records every deploy request and fakes one
    /// transaction per distinct contract name.
    #[derive(Default)]
    struct RecordingDeployments {
        calls: Mutex<Vec<(String, DeployCall)>>,
        transactions: Mutex<Vec<String>>,
    }

    impl Deployments for RecordingDeployments {
        async fn deploy(&self, name: &str, call: DeployCall) -> eyre::Result<Deployed> {
            self.calls.lock().unwrap().push((name.to_string(), call.clone()));

            let mut transactions = self.transactions.lock().unwrap();
            let newly_deployed = !transactions.iter().any(|sent| sent == name);
            if newly_deployed {
                transactions.push(name.to_string());
            }

            Ok(Deployed {
                deployment: Deployment {
                    contract_name: name.to_string(),
                    address: Address::from([7u8; 20]),
                    abi: serde_json::json!([]),
                    transaction_hash: TxHash::from([9u8; 32]),
                    block_number: Some(1),
                    bytecode: Bytes::from_static(&[0x60, 0x01]),
                    args: call.args,
                    confirmations: call.wait_confirmations,
                },
                newly_deployed,
            })
        }

        async fn get(&self, _name: &str) -> eyre::Result<Option<Deployment>> {
            Ok(None)
        }
    }

    fn context(name: &str, deployments: RecordingDeployments) -> Context<RecordingDeployments> {
        Context {
            chain_id: 31337,
            chain_name: name.to_string(),
            deployer: Address::from([1u8; 20]),
            registry: NetworkRegistry::builtin(),
            deployments,
            block_confirmations: None,
        }
    }

    #[tokio::test]
    async fn test_hardhat_deploys_the_mock_coordinator() {
        let ctx = context("hardhat", RecordingDeployments::default());
        DeployMocks.run(&ctx).await.unwrap();

        let calls = ctx.deployments.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);

        let (name, call) = &calls[0];
        assert_eq!(name, MOCK_CONTRACT);
        assert_eq!(call.from, ctx.deployer);
        assert_eq!(call.wait_confirmations, DEFAULT_WAIT_CONFIRMATIONS);
        assert!(call.log);
    }

    #[tokio::test]
    async fn test_constructor_args_carry_the_fixed_fees() {
        let ctx = context("localhost", RecordingDeployments::default());
        DeployMocks.run(&ctx).await.unwrap();

        let calls = ctx.deployments.calls.lock().unwrap();
        let (_, call) = &calls[0];
        let (base_fee, gas_price_link) =
            <(U96, U96)>::abi_decode_params(&call.args).unwrap();
        assert_eq!(base_fee, U96::from(250_000_000_000_000_000u64));
        assert_eq!(gas_price_link, U96::from(1_000_000_000u64));
    }

    #[tokio::test]
    async fn test_live_network_is_skipped() {
        let ctx = context("rinkeby", RecordingDeployments::default());
        DeployMocks.run(&ctx).await.unwrap();
        assert!(ctx.deployments.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_network_is_treated_as_live() {
        let ctx = context("polygon", RecordingDeployments::default());
        DeployMocks.run(&ctx).await.unwrap();
        assert!(ctx.deployments.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_network_confirmation_override_is_forwarded() {
        let mut ctx = context("hardhat", RecordingDeployments::default());
        ctx.block_confirmations = Some(6);
        DeployMocks.run(&ctx).await.unwrap();

        let calls = ctx.deployments.calls.lock().unwrap();
        assert_eq!(calls[0].1.wait_confirmations, 6);
    }

    #[tokio::test]
    async fn test_rerun_reuses_the_first_deployment() {
        let ctx = context("hardhat", RecordingDeployments::default());
        DeployMocks.run(&ctx).await.unwrap();
        DeployMocks.run(&ctx).await.unwrap();

        assert_eq!(ctx.deployments.calls.lock().unwrap().len(), 2);
        assert_eq!(ctx.deployments.transactions.lock().unwrap().len(), 1);
    }
}
