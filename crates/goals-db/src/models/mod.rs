//! Database row models with SQLx `FromRow` derives

mod board;
mod category;
mod comment;
mod goal;
mod refresh_token;
mod tg_account;
mod user;

pub use board::{BoardModel, ParticipantModel};
pub use category::CategoryModel;
pub use comment::CommentModel;
pub use goal::GoalModel;
pub use refresh_token::RefreshTokenModel;
pub use tg_account::TgAccountModel;
pub use user::UserModel;
