//! Long-polling loop
//!
//! One sequential `getUpdates` loop; at-least-once handling, single bot
//! instance. Transport failures re-enter the loop after a fixed sleep.

use std::sync::Arc;
use std::time::Duration;

use goals_common::{AppConfig, AppError};
use goals_core::SnowflakeGenerator;
use goals_db::{create_pool, PgGoalRepository, PgTgAccountRepository};
use goals_tg::TgClient;
use tracing::{error, info};

use crate::dispatcher::BotDispatcher;

/// Run the bot against live dependencies until the process is stopped
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    if config.bot.token.is_empty() {
        return Err(AppError::Config(
            "TG_BOT_TOKEN is required to run the bot".to_string(),
        ));
    }

    info!("Connecting to PostgreSQL...");
    let db_config = goals_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    let client = Arc::new(
        TgClient::new(
            &config.bot.token,
            Duration::from_secs(config.bot.poll_timeout_secs),
        )
        .map_err(|e| AppError::ExternalService(e.to_string()))?,
    );

    let dispatcher = BotDispatcher::new(
        Arc::new(PgTgAccountRepository::new(pool.clone())),
        Arc::new(PgGoalRepository::new(pool)),
        client.clone(),
        Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id)),
        config.bot.site_url.clone(),
    );

    info!("Bot polling loop starting");
    poll_forever(
        &client,
        &dispatcher,
        config.bot.poll_timeout_secs,
        Duration::from_secs(config.bot.retry_delay_secs),
    )
    .await
}

/// The polling loop proper
///
/// The offset cursor is an explicit value threaded through each iteration.
/// A failed `getUpdates` keeps the current offset and retries after a fixed
/// delay; there is no backoff.
async fn poll_forever(
    client: &TgClient,
    dispatcher: &BotDispatcher,
    poll_timeout_secs: u64,
    retry_delay: Duration,
) -> Result<(), AppError> {
    let mut offset = 0i64;

    loop {
        match client.get_updates(offset, poll_timeout_secs).await {
            Ok(updates) => {
                offset = dispatcher.process_batch(updates, offset).await;
            }
            Err(e) => {
                error!(error = %e, "getUpdates failed, retrying");
                tokio::time::sleep(retry_delay).await;
            }
        }
    }
}
