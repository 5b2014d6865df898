//! Board handlers

use axum::extract::{Path, State};
use axum::Json;
use goals_service::dto::{
    BoardResponse, CreateBoardRequest, ParticipantResponse, SetParticipantsRequest,
    UpdateBoardRequest,
};
use goals_service::BoardService;

use crate::extractors::{AuthUser, BoardIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a board
///
/// POST /board/create
pub async fn create_board(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateBoardRequest>,
) -> ApiResult<Created<Json<BoardResponse>>> {
    let service = BoardService::new(state.service_context());
    let response = service.create_board(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List the caller's boards
///
/// GET /board/list
pub async fn list_boards(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<BoardResponse>>> {
    let service = BoardService::new(state.service_context());
    let response = service.list_boards(auth.user_id).await?;
    Ok(Json(response))
}

/// Fetch a board
///
/// GET /board/:board_id
pub async fn get_board(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<BoardIdPath>,
) -> ApiResult<Json<BoardResponse>> {
    let service = BoardService::new(state.service_context());
    let response = service.get_board(auth.user_id, path.board_id()?).await?;
    Ok(Json(response))
}

/// Rename a board
///
/// PATCH /board/:board_id
pub async fn update_board(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<BoardIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateBoardRequest>,
) -> ApiResult<Json<BoardResponse>> {
    let service = BoardService::new(state.service_context());
    let response = service
        .update_board(auth.user_id, path.board_id()?, request)
        .await?;
    Ok(Json(response))
}

/// Soft-delete a board
///
/// DELETE /board/:board_id
pub async fn delete_board(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<BoardIdPath>,
) -> ApiResult<NoContent> {
    let service = BoardService::new(state.service_context());
    service.delete_board(auth.user_id, path.board_id()?).await?;
    Ok(NoContent)
}

/// List a board's participants
///
/// GET /board/:board_id/participants
pub async fn list_participants(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<BoardIdPath>,
) -> ApiResult<Json<Vec<ParticipantResponse>>> {
    let service = BoardService::new(state.service_context());
    let response = service
        .list_participants(auth.user_id, path.board_id()?)
        .await?;
    Ok(Json(response))
}

/// Replace the non-owner participant set
///
/// PUT /board/:board_id/participants
pub async fn set_participants(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<BoardIdPath>,
    Json(request): Json<SetParticipantsRequest>,
) -> ApiResult<Json<Vec<ParticipantResponse>>> {
    let service = BoardService::new(state.service_context());
    let response = service
        .set_participants(auth.user_id, path.board_id()?, request)
        .await?;
    Ok(Json(response))
}
