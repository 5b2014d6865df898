//! HTTP client for the Telegram Bot API

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, instrument};

use goals_core::traits::{BotGateway, GatewayResult};

use crate::error::TgError;
use crate::types::{TgResponse, TgUpdate};

const API_BASE: &str = "https://api.telegram.org";

/// Client for the Telegram Bot API
///
/// Cheap to clone; the inner reqwest client is reference-counted.
#[derive(Clone)]
pub struct TgClient {
    http: reqwest::Client,
    base_url: String,
}

impl TgClient {
    /// Create a client for the given bot token
    ///
    /// `poll_timeout` is the long-poll window for `getUpdates`; the HTTP
    /// timeout is set above it so the server side always wins the race.
    pub fn new(token: &str, poll_timeout: Duration) -> Result<Self, TgError> {
        Self::with_base_url(token, poll_timeout, API_BASE)
    }

    /// Create a client against a non-default endpoint (used by tests)
    pub fn with_base_url(
        token: &str,
        poll_timeout: Duration,
        base_url: &str,
    ) -> Result<Self, TgError> {
        let http = reqwest::Client::builder()
            .timeout(poll_timeout + Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            base_url: format!("{}/bot{}", base_url.trim_end_matches('/'), token),
        })
    }

    /// Fetch pending updates starting at `offset`
    ///
    /// Blocks server-side for up to `timeout_secs` when no updates are
    /// pending. Updates below `offset` are considered confirmed by
    /// Telegram and are never redelivered.
    #[instrument(skip(self))]
    pub async fn get_updates(&self, offset: i64, timeout_secs: u64) -> Result<Vec<TgUpdate>, TgError> {
        let updates: Vec<TgUpdate> = self
            .call(
                "getUpdates",
                &json!({
                    "offset": offset,
                    "timeout": timeout_secs,
                    "allowed_updates": ["message"],
                }),
            )
            .await?;

        debug!(count = updates.len(), "fetched updates");
        Ok(updates)
    }

    /// Send a plain-text message
    #[instrument(skip(self, text))]
    pub async fn send_text(&self, chat_id: i64, text: &str) -> Result<(), TgError> {
        let _: serde_json::Value = self
            .call(
                "sendMessage",
                &json!({
                    "chat_id": chat_id,
                    "text": text,
                }),
            )
            .await?;

        Ok(())
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        body: &serde_json::Value,
    ) -> Result<T, TgError> {
        let url = format!("{}/{}", self.base_url, method);

        let response = self.http.post(&url).json(body).send().await?;
        let envelope: TgResponse<T> = response
            .json()
            .await
            .map_err(|e| TgError::Decode(e.to_string()))?;

        if !envelope.ok {
            return Err(TgError::Api(
                envelope
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            ));
        }

        envelope
            .result
            .ok_or_else(|| TgError::Decode("ok response with no result".to_string()))
    }
}

#[async_trait]
impl BotGateway for TgClient {
    async fn send_message(&self, chat_id: i64, text: &str) -> GatewayResult<()> {
        self.send_text(chat_id, text).await.map_err(Into::into)
    }
}
