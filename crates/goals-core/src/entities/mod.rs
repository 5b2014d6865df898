//! Domain entities

mod board;
mod category;
mod comment;
mod goal;
mod participant;
mod tg_account;
mod user;

pub use board::Board;
pub use category::GoalCategory;
pub use comment::GoalComment;
pub use goal::Goal;
pub use participant::BoardParticipant;
pub use tg_account::{generate_verification_code, TgAccount};
pub use user::User;
