//! PostgreSQL repository implementations

mod board;
mod category;
mod comment;
mod error;
mod goal;
mod participant;
mod refresh_token;
mod tg_account;
mod user;

pub use board::PgBoardRepository;
pub use category::PgCategoryRepository;
pub use comment::PgCommentRepository;
pub use goal::PgGoalRepository;
pub use participant::PgParticipantRepository;
pub use refresh_token::PgRefreshTokenRepository;
pub use tg_account::PgTgAccountRepository;
pub use user::PgUserRepository;
