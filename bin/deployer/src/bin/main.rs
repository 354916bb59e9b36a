use alloy_primitives::utils::format_ether;
use alloy_provider::Provider;
use artifact::ArtifactStore;
use clap::Parser;
use config::NetworkRegistry;
use deploy::{engine::DeploymentEngine, Context};
use deployer::{builtin_steps, config::Config};
use tracing::info;

/// Deploys the project's contracts and records the results.
#[derive(Debug, Parser)]
#[command(name = "deployer", about = "Deploys project contracts to a configured network")]
struct Cli {
    /// Path to the deployer configuration file
    #[arg(short, long, default_value = "deployer.toml")]
    config: String,

    /// Network to deploy to (defaults to the one in the configuration file)
    #[arg(short, long)]
    network: Option<String>,

    /// Only run steps carrying one of these tags
    #[arg(short, long)]
    tags: Vec<String>,

    /// Private key of the deployer account
    #[arg(short = 'k', long, env = "PRIVATE_KEY", hide_env_values = true)]
    private_key: String,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!("Starting deployer");
    info!("Loading config: {}", cli.config);
    let config = Config::from_file(&cli.config)?;

    let network = cli.network.unwrap_or_else(|| config.network.clone());
    let settings = config.network_settings(&network)?;

    let signer = client::parse_signer(&cli.private_key)?;
    let deployer = signer.address();

    info!("Connecting to {}...", network);
    let provider = client::create_wallet_provider(&settings.rpc_url, &cli.private_key)?;
    let chain_id = provider.get_chain_id().await?;

    // Every chain we deploy to must have a configuration entry.
    let registry = NetworkRegistry::builtin();
    let network_config = registry.lookup(chain_id)?;

    info!("Loaded network:");
    info!("  Name: {}", network);
    info!("  Chain ID: {}", chain_id);
    info!("  RPC URL: {}", settings.rpc_url);
    info!("  Deployer: {}", deployer);
    info!(
        "  Entrance fee: {} ETH",
        format_ether(network_config.entrance_fee)
    );

    let store = ArtifactStore::new(config.artifacts_dir.clone(), config.deployments_dir.clone());
    let engine = DeploymentEngine::new(provider, store, network.clone());

    let ctx = Context {
        chain_id,
        chain_name: network,
        deployer,
        registry,
        deployments: engine,
        block_confirmations: settings.block_confirmations,
    };

    let steps = builtin_steps();
    deploy::run_steps(&steps, &ctx, &cli.tags).await?;

    info!("Deployment run complete");
    Ok(())
}
