use std::env;
use std::fs;

use anyhow::{Context, Result, anyhow};
use tracing::{error, info};
use tracing_subscriber::{self, EnvFilter};

use tx_result_adapter::TxResultAdapter;
use tx_result_adapter::utils::load_config;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    info!("=========================== INITIALIZING ===========================");

    // Load config
    let config = match load_config("config.yml") {
        Ok(config) => {
            info!("Config loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load config: {}", e);
            return Err(anyhow!(e));
        }
    };

    let adapter = TxResultAdapter::from_config(&config.chain);
    info!("Address prefix: {}", adapter.hrp());

    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        return Err(anyhow!("usage: tx-result-adapter <tx-result.json>..."));
    }

    info!("========================== ADAPTING RESULTS ==========================");

    for path in paths {
        let json = fs::read_to_string(&path).with_context(|| format!("failed to read {}", path))?;
        let tx_result = adapter
            .adapt_json(&json)
            .with_context(|| format!("failed to adapt {}", path))?;

        info!(
            "Tx {} at height {}: {} messages, {} events",
            tx_result.summary.tx_hash,
            tx_result.summary.height,
            tx_result.tx_messages.len(),
            tx_result.tx_events.len()
        );
        println!("{}", serde_json::to_string_pretty(&tx_result)?);
    }

    Ok(())
}
