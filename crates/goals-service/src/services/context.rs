//! Service context - dependency container for services
//!
//! Holds all repositories and shared services. Everything repository-shaped
//! is behind a trait object so tests can substitute in-memory fakes.

use std::sync::Arc;

use goals_common::auth::JwtService;
use goals_core::access::AccessPolicy;
use goals_core::traits::{
    BoardRepository, BotGateway, CategoryRepository, CommentRepository, GoalRepository,
    ParticipantRepository, RefreshTokenRepository, TgAccountRepository, UserRepository,
};
use goals_core::SnowflakeGenerator;
use goals_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
/// - Snowflake generator for ID generation
/// - The outbound bot gateway (absent when no bot token is configured)
/// - Access-control policy knobs
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,

    user_repo: Arc<dyn UserRepository>,
    board_repo: Arc<dyn BoardRepository>,
    participant_repo: Arc<dyn ParticipantRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    goal_repo: Arc<dyn GoalRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    tg_account_repo: Arc<dyn TgAccountRepository>,
    refresh_token_repo: Arc<dyn RefreshTokenRepository>,

    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
    bot_gateway: Option<Arc<dyn BotGateway>>,
    access_policy: AccessPolicy,
}

impl ServiceContext {
    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the board repository
    pub fn board_repo(&self) -> &dyn BoardRepository {
        self.board_repo.as_ref()
    }

    /// Get the participant repository
    pub fn participant_repo(&self) -> &dyn ParticipantRepository {
        self.participant_repo.as_ref()
    }

    /// Get the category repository
    pub fn category_repo(&self) -> &dyn CategoryRepository {
        self.category_repo.as_ref()
    }

    /// Get the goal repository
    pub fn goal_repo(&self) -> &dyn GoalRepository {
        self.goal_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the Telegram account repository
    pub fn tg_account_repo(&self) -> &dyn TgAccountRepository {
        self.tg_account_repo.as_ref()
    }

    /// Get the refresh token repository
    pub fn refresh_token_repo(&self) -> &dyn RefreshTokenRepository {
        self.refresh_token_repo.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Get the bot gateway, if one is configured
    pub fn bot_gateway(&self) -> Option<&dyn BotGateway> {
        self.bot_gateway.as_deref()
    }

    /// Get the access-control policy
    pub fn access_policy(&self) -> &AccessPolicy {
        &self.access_policy
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> goals_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("access_policy", &self.access_policy)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    board_repo: Option<Arc<dyn BoardRepository>>,
    participant_repo: Option<Arc<dyn ParticipantRepository>>,
    category_repo: Option<Arc<dyn CategoryRepository>>,
    goal_repo: Option<Arc<dyn GoalRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    tg_account_repo: Option<Arc<dyn TgAccountRepository>>,
    refresh_token_repo: Option<Arc<dyn RefreshTokenRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    bot_gateway: Option<Arc<dyn BotGateway>>,
    access_policy: AccessPolicy,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn board_repo(mut self, repo: Arc<dyn BoardRepository>) -> Self {
        self.board_repo = Some(repo);
        self
    }

    pub fn participant_repo(mut self, repo: Arc<dyn ParticipantRepository>) -> Self {
        self.participant_repo = Some(repo);
        self
    }

    pub fn category_repo(mut self, repo: Arc<dyn CategoryRepository>) -> Self {
        self.category_repo = Some(repo);
        self
    }

    pub fn goal_repo(mut self, repo: Arc<dyn GoalRepository>) -> Self {
        self.goal_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn tg_account_repo(mut self, repo: Arc<dyn TgAccountRepository>) -> Self {
        self.tg_account_repo = Some(repo);
        self
    }

    pub fn refresh_token_repo(mut self, repo: Arc<dyn RefreshTokenRepository>) -> Self {
        self.refresh_token_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn bot_gateway(mut self, gateway: Arc<dyn BotGateway>) -> Self {
        self.bot_gateway = Some(gateway);
        self
    }

    pub fn access_policy(mut self, policy: AccessPolicy) -> Self {
        self.access_policy = policy;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext {
            pool: self
                .pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            user_repo: self
                .user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            board_repo: self
                .board_repo
                .ok_or_else(|| ServiceError::validation("board_repo is required"))?,
            participant_repo: self
                .participant_repo
                .ok_or_else(|| ServiceError::validation("participant_repo is required"))?,
            category_repo: self
                .category_repo
                .ok_or_else(|| ServiceError::validation("category_repo is required"))?,
            goal_repo: self
                .goal_repo
                .ok_or_else(|| ServiceError::validation("goal_repo is required"))?,
            comment_repo: self
                .comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            tg_account_repo: self
                .tg_account_repo
                .ok_or_else(|| ServiceError::validation("tg_account_repo is required"))?,
            refresh_token_repo: self
                .refresh_token_repo
                .ok_or_else(|| ServiceError::validation("refresh_token_repo is required"))?,
            jwt_service: self
                .jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            snowflake_generator: self
                .snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
            bot_gateway: self.bot_gateway,
            access_policy: self.access_policy,
        })
    }
}
