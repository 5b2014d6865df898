//! Bot verification handler

use axum::{extract::State, Json};
use goals_service::dto::{ConfirmVerificationRequest, VerificationResponse};
use goals_service::VerificationService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Bind the caller to the Telegram account holding this code
///
/// PATCH /bot/verify
pub async fn verify(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ConfirmVerificationRequest>,
) -> ApiResult<Json<VerificationResponse>> {
    let service = VerificationService::new(state.service_context());
    let response = service.confirm(auth.user_id, request).await?;
    Ok(Json(response))
}
