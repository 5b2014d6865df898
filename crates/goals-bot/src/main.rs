//! GoalBoard Telegram bot entry point
//!
//! Run with:
//! ```bash
//! cargo run -p goals-bot
//! ```
//!
//! Configuration is loaded from environment variables (with .env support).

use goals_common::{try_init_tracing, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Bot failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting GoalBoard bot...");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(env = ?config.app.env, "Configuration loaded");

    goals_bot::run(config).await?;

    Ok(())
}
