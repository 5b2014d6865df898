//! Telegram client errors

use goals_core::traits::GatewayError;
use thiserror::Error;

/// Errors from the Telegram Bot API client
#[derive(Debug, Error)]
pub enum TgError {
    /// Could not reach the endpoint (connect, timeout, TLS)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with `ok: false`
    #[error("api error: {0}")]
    Api(String),

    /// The response body did not match the expected shape
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<TgError> for GatewayError {
    fn from(e: TgError) -> Self {
        match e {
            TgError::Transport(inner) => GatewayError::Unavailable(inner.to_string()),
            TgError::Api(desc) => GatewayError::Rejected(desc),
            TgError::Decode(desc) => GatewayError::Decode(desc),
        }
    }
}
