//! # goals-db
//!
//! Database layer implementing the repository traits from `goals-core` with
//! PostgreSQL via SQLx: connection pool management, `FromRow` models,
//! entity/model mappers, and repository implementations.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgBoardRepository, PgCategoryRepository, PgCommentRepository, PgGoalRepository,
    PgParticipantRepository, PgRefreshTokenRepository, PgTgAccountRepository, PgUserRepository,
};
