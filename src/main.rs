use anyhow::Context;
use dexvol::config::Config;
use dexvol::datasource::{JsonRpcLogSource, LogSource};
use dexvol::domain::WalletAddress;
use dexvol::orchestration::StatsCollector;
use dexvol::report;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Address is validated before anything touches the network.
    let wallet = acquire_wallet(&config)?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.rpc_timeout_secs))
        .build()
        .context("failed to build http client")?;
    let source = Arc::new(JsonRpcLogSource::new(client, config.rpc_endpoint.clone()));

    // Connectivity probe; no work is possible without a node.
    let head = source
        .latest_block()
        .await
        .context("failed to reach the rpc endpoint")?;
    tracing::info!("connected to rpc endpoint, head block {}", head);
    tracing::info!("fetching stats for {}", wallet);

    let collector = StatsCollector::new(source, config.log_chunk_blocks);
    let stats = collector.collect(&wallet, head).await;

    print!("{}", report::render(&stats));
    Ok(())
}

/// Wallet address from the environment when configured, otherwise a single
/// interactive prompt. Validation failure aborts the run.
fn acquire_wallet(config: &Config) -> anyhow::Result<WalletAddress> {
    let input = match &config.wallet_address {
        Some(addr) => addr.clone(),
        None => prompt_wallet()?,
    };

    WalletAddress::parse(&input)
        .with_context(|| format!("invalid wallet address {:?}", input.trim()))
}

fn prompt_wallet() -> anyhow::Result<String> {
    print!("Enter your wallet address: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read wallet address from stdin")?;
    Ok(line)
}
