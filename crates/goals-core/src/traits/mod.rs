//! Ports - repository traits and the bot gateway

mod gateway;
mod repositories;

pub use gateway::{BotGateway, GatewayError, GatewayResult};
pub use repositories::{
    BoardRepository, CategoryQuery, CategoryRepository, CommentRepository, GoalOrdering,
    GoalQuery, GoalRepository, ParticipantRepository, RefreshTokenRecord, RefreshTokenRepository,
    RepoResult, TgAccountRepository, UserRepository,
};
