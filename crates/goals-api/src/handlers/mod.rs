//! Request handlers organized by domain

pub mod auth;
pub mod boards;
pub mod categories;
pub mod comments;
pub mod goals;
pub mod health;
pub mod users;
pub mod verification;
