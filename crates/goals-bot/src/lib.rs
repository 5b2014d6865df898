//! # goals-bot
//!
//! Telegram relay bot: a single sequential long-polling loop that answers
//! chat messages, hands out verification codes, and lists goals for linked
//! users.

pub mod dispatcher;
pub mod poller;

pub use dispatcher::BotDispatcher;
pub use poller::run;
