//! Goal handlers

use axum::extract::{Path, State};
use axum::Json;
use goals_service::dto::{CreateGoalRequest, GoalListQuery, GoalResponse, UpdateGoalRequest};
use goals_service::GoalService;

use crate::extractors::{ApiQuery, AuthUser, GoalIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a goal in a category
///
/// POST /goal/create
pub async fn create_goal(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateGoalRequest>,
) -> ApiResult<Created<Json<GoalResponse>>> {
    let service = GoalService::new(state.service_context());
    let response = service.create_goal(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List the caller's non-archived goals
///
/// GET /goal/list
pub async fn list_goals(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiQuery(query): ApiQuery<GoalListQuery>,
) -> ApiResult<Json<Vec<GoalResponse>>> {
    let service = GoalService::new(state.service_context());
    let response = service.list_goals(auth.user_id, &query).await?;
    Ok(Json(response))
}

/// Fetch a goal
///
/// GET /goal/:goal_id
pub async fn get_goal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<GoalIdPath>,
) -> ApiResult<Json<GoalResponse>> {
    let service = GoalService::new(state.service_context());
    let response = service.get_goal(auth.user_id, path.goal_id()?).await?;
    Ok(Json(response))
}

/// Partial patch of a goal
///
/// PATCH /goal/:goal_id
pub async fn update_goal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<GoalIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateGoalRequest>,
) -> ApiResult<Json<GoalResponse>> {
    let service = GoalService::new(state.service_context());
    let response = service
        .update_goal(auth.user_id, path.goal_id()?, request)
        .await?;
    Ok(Json(response))
}

/// Archive a goal; the row remains
///
/// DELETE /goal/:goal_id
pub async fn archive_goal(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<GoalIdPath>,
) -> ApiResult<NoContent> {
    let service = GoalService::new(state.service_context());
    service.archive_goal(auth.user_id, path.goal_id()?).await?;
    Ok(NoContent)
}
