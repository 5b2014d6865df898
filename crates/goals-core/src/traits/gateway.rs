//! Bot gateway port - outbound messaging to the chat platform
//!
//! The service layer sends verification confirmations through this trait;
//! the relay loop uses the same implementation for its replies. Keeping the
//! port here lets services be tested with an in-memory fake.

use async_trait::async_trait;
use thiserror::Error;

/// Errors talking to the external messaging endpoint
///
/// All variants are treated as retryable by the relay loop.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("messaging endpoint unavailable: {0}")]
    Unavailable(String),

    #[error("messaging endpoint rejected the request: {0}")]
    Rejected(String),

    #[error("failed to decode endpoint response: {0}")]
    Decode(String),
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Outbound side of the chat platform
#[async_trait]
pub trait BotGateway: Send + Sync {
    /// Send a plain-text message into a chat
    async fn send_message(&self, chat_id: i64, text: &str) -> GatewayResult<()>;
}
