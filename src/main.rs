mod bot;
mod commands;
mod config;
mod health;
mod news;
mod quotes;

use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::bot::AppState;
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,openstart_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Validate configuration before starting anything. A missing token or
    // API key aborts startup with a log line and a normal return.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Startup aborted: {:#}", e);
            return Ok(());
        }
    };

    info!("Configuration loaded successfully");
    info!("  Health port: {}", config.health_port);

    // The health endpoint lives on its own task; its failure is logged but
    // never stops chat dispatch.
    let health_port = config.health_port;
    tokio::spawn(async move {
        if let Err(e) = health::run(health_port).await {
            error!("Health endpoint error: {:#}", e);
        }
    });

    let state = Arc::new(AppState::new(config));

    info!("Bot is starting...");
    bot::run(state).await?;

    Ok(())
}
