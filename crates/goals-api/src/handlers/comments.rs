//! Goal comment handlers

use axum::extract::{Path, State};
use axum::Json;
use goals_service::dto::{
    CommentListQuery, CommentResponse, CreateCommentRequest, UpdateCommentRequest,
};
use goals_service::CommentService;

use crate::extractors::{ApiQuery, AuthUser, CommentIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Comment on one of the caller's goals
///
/// POST /goal_comment/create
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let response = service.create_comment(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List the caller's comments
///
/// GET /goal_comment/list?goal=<id>
pub async fn list_comments(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiQuery(query): ApiQuery<CommentListQuery>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let response = service.list_comments(auth.user_id, &query).await?;
    Ok(Json(response))
}

/// Fetch a comment
///
/// GET /goal_comment/:comment_id
pub async fn get_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentIdPath>,
) -> ApiResult<Json<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service
        .get_comment(auth.user_id, path.comment_id()?)
        .await?;
    Ok(Json(response))
}

/// Edit a comment
///
/// PATCH /goal_comment/:comment_id
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service
        .update_comment(auth.user_id, path.comment_id()?, request)
        .await?;
    Ok(Json(response))
}

/// Hard-delete a comment
///
/// DELETE /goal_comment/:comment_id
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentIdPath>,
) -> ApiResult<NoContent> {
    let service = CommentService::new(state.service_context());
    service
        .delete_comment(auth.user_id, path.comment_id()?)
        .await?;
    Ok(NoContent)
}
