//! Telegram Bot API adapter
//!
//! A thin HTTP client over the two methods the system actually uses
//! (`getUpdates` and `sendMessage`), plus the wire types to decode them.
//! Implements the [`goals_core::traits::BotGateway`] port so the service
//! and relay layers never see HTTP details.

pub mod client;
pub mod error;
pub mod types;

pub use client::TgClient;
pub use error::TgError;
pub use types::{TgChat, TgMessage, TgUpdate, TgUser};
