//! PowerGrid Gateway
//!
//! Run with: cargo run --bin powergrid
//!
//! # Configuration
//!
//! Reads `--config <path>` or the first of
//! `~/.config/powergrid/config.toml`, `/etc/powergrid/config.toml`,
//! `./config.toml`; environment variables (`POWERGRID_*`, `OPENAI_API_KEY`)
//! override file values. `RUST_LOG` overrides the configured log level.

use anyhow::Context;
use clap::Parser;
use powergrid::api::{serve, AppState};
use powergrid::config::{generate_default_config, Config, LoggingConfig};
use powergrid::intelligence::ComplianceEngine;
use powergrid::telemetry::Simulator;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "powergrid")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Smart-meter telemetry and compliance assistant gateway for the PowerGrid dashboard")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a commented default config and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let config_path = cli.config.or_else(Config::default_path);
    let config = match &config_path {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => Config::from_env(),
    };

    init_tracing(&config.logging);

    tracing::info!("Starting PowerGrid gateway v{}", env!("CARGO_PKG_VERSION"));
    match &config_path {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }

    // Start the meter simulation
    let simulator = Arc::new(Simulator::new());
    let simulation = simulator.start(
        config.simulator.meter_count,
        Duration::from_millis(config.simulator.tick_interval_ms),
    );

    // Compliance assistant
    let engine = ComplianceEngine::new(config.intelligence.clone())
        .context("building the LLM client")?;
    if config.intelligence.has_api_key() {
        tracing::info!("Compliance assistant using model {}", config.intelligence.model);
    } else {
        tracing::warn!("OPENAI_API_KEY not set, compliance assistant runs in simulation mode");
    }

    let state = AppState::new(Arc::clone(&simulator), Arc::new(engine), config.api.clone());

    // Run server
    serve(state, &config.api).await?;

    // Graceful shutdown
    tracing::info!("Stopping simulation...");
    simulator.shutdown().await;
    if let Err(e) = simulation.await {
        tracing::warn!("Simulation task ended abnormally: {}", e);
    }
    tracing::info!("PowerGrid gateway stopped");

    Ok(())
}

/// Install the global tracing subscriber
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("powergrid={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
