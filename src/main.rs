mod compose;
mod config;
mod date;
mod error;
mod job;
mod platform;
mod quote;
mod weather;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

// Runs once and exits; an external scheduler decides when.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,morningbot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.toml"));

    info!("Loading configuration from: {}", config_path.display());
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    info!("  Recipient: {}", config.general.name);
    info!("  Chat: {}", config.telegram.chat_id);
    info!(
        "  Countdown: {} ({})",
        config.countdown.event, config.countdown.end_date
    );

    let http = reqwest::Client::new();
    job::run(&config, &http).await;

    Ok(())
}
