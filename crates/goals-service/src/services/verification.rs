//! Bot verification service
//!
//! Completes the link between a Telegram identity and the calling user.

use goals_core::value_objects::Snowflake;
use tracing::{info, instrument, warn};

use crate::dto::{ConfirmVerificationRequest, VerificationResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Message sent into the chat once the link is established
pub const VERIFIED_MESSAGE: &str = "Verification completed successfully";

/// Bot verification service
pub struct VerificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VerificationService<'a> {
    /// Create a new VerificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Bind the caller to the Telegram account holding this code
    ///
    /// Unknown codes surface as NotFound. The confirmation message is best
    /// effort: a gateway failure is logged but never unwinds the link.
    #[instrument(skip(self, request))]
    pub async fn confirm(
        &self,
        actor: Snowflake,
        request: ConfirmVerificationRequest,
    ) -> ServiceResult<VerificationResponse> {
        let mut account = self
            .ctx
            .tg_account_repo()
            .find_by_verification_code(&request.verification_code)
            .await?
            .ok_or_else(|| ServiceError::not_found("Verification code", "unknown"))?;

        account.link(actor);
        self.ctx.tg_account_repo().update(&account).await?;

        info!(user_id = %actor, tg_user_id = account.tg_user_id, "Telegram account linked");

        if let Some(gateway) = self.ctx.bot_gateway() {
            if let Err(e) = gateway.send_message(account.tg_chat_id, VERIFIED_MESSAGE).await {
                warn!(error = %e, "Failed to send verification confirmation");
            }
        }

        Ok(VerificationResponse::from(&account))
    }
}
