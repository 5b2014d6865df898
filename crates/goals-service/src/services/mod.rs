//! Service layer - business logic

mod access;
mod auth;
mod board;
mod category;
mod comment;
mod context;
mod error;
mod goal;
mod user;
mod verification;

#[cfg(test)]
pub(crate) mod test_support;

pub use access::AccessGuard;
pub use auth::AuthService;
pub use board::BoardService;
pub use category::CategoryService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use goal::GoalService;
pub use user::UserService;
pub use verification::VerificationService;
