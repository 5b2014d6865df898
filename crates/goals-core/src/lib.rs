//! # goals-core
//!
//! Domain layer containing entities, value objects, the access-control rule
//! table, repository traits, and the bot gateway port. This crate has zero
//! dependencies on infrastructure (database, web framework, etc.).

pub mod access;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use access::{authorize, AccessPolicy, Action, Decision, Resource};
pub use entities::{
    generate_verification_code, Board, BoardParticipant, Goal, GoalCategory, GoalComment,
    TgAccount, User,
};
pub use error::DomainError;
pub use traits::{
    BoardRepository, BotGateway, CategoryRepository, CommentRepository, GoalQuery, GoalRepository,
    ParticipantRepository, RefreshTokenRepository, RepoResult, TgAccountRepository,
    UserRepository,
};
pub use value_objects::{
    BoardRole, GoalPriority, GoalStatus, Snowflake, SnowflakeGenerator, SnowflakeParseError,
};
