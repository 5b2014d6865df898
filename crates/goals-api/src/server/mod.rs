//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use goals_common::{AppConfig, AppError, JwtService};
use goals_core::access::AccessPolicy;
use goals_core::SnowflakeGenerator;
use goals_db::{
    create_pool, PgBoardRepository, PgCategoryRepository, PgCommentRepository, PgGoalRepository,
    PgParticipantRepository, PgRefreshTokenRepository, PgTgAccountRepository, PgUserRepository,
};
use goals_service::ServiceContextBuilder;
use goals_tg::TgClient;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(
        router,
        &state.config().cors,
        state.config().app.env.is_production(),
    );
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
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

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));

    // Create Snowflake generator
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let board_repo = Arc::new(PgBoardRepository::new(pool.clone()));
    let participant_repo = Arc::new(PgParticipantRepository::new(pool.clone()));
    let category_repo = Arc::new(PgCategoryRepository::new(pool.clone()));
    let goal_repo = Arc::new(PgGoalRepository::new(pool.clone()));
    let comment_repo = Arc::new(PgCommentRepository::new(pool.clone()));
    let tg_account_repo = Arc::new(PgTgAccountRepository::new(pool.clone()));
    let refresh_token_repo = Arc::new(PgRefreshTokenRepository::new(pool.clone()));

    // Build service context
    let mut builder = ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(user_repo)
        .board_repo(board_repo)
        .participant_repo(participant_repo)
        .category_repo(category_repo)
        .goal_repo(goal_repo)
        .comment_repo(comment_repo)
        .tg_account_repo(tg_account_repo)
        .refresh_token_repo(refresh_token_repo)
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator)
        .access_policy(AccessPolicy {
            editor_may_delete_categories: config.access.editor_may_delete_categories,
        });

    // An empty token disables outbound bot messages
    if !config.bot.token.is_empty() {
        let client = TgClient::new(
            &config.bot.token,
            Duration::from_secs(config.bot.poll_timeout_secs),
        )
        .map_err(|e| AppError::ExternalService(e.to_string()))?;
        builder = builder.bot_gateway(Arc::new(client));
        info!("Telegram gateway enabled");
    } else {
        info!("Telegram gateway disabled (no token configured)");
    }

    let service_context = builder
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
