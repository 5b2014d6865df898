//! Goal category handlers

use axum::extract::{Path, State};
use axum::Json;
use goals_service::dto::{
    CategoryResponse, CreateCategoryRequest, ListQuery, UpdateCategoryRequest,
};
use goals_service::CategoryService;

use crate::extractors::{ApiQuery, AuthUser, CategoryIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a category on a board
///
/// POST /goal_category/create
pub async fn create_category(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCategoryRequest>,
) -> ApiResult<Created<Json<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    let response = service.create_category(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List the caller's categories
///
/// GET /goal_category/list
pub async fn list_categories(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> ApiResult<Json<Vec<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    let response = service.list_categories(auth.user_id, &query).await?;
    Ok(Json(response))
}

/// Fetch a category
///
/// GET /goal_category/:category_id
pub async fn get_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CategoryIdPath>,
) -> ApiResult<Json<CategoryResponse>> {
    let service = CategoryService::new(state.service_context());
    let response = service
        .get_category(auth.user_id, path.category_id()?)
        .await?;
    Ok(Json(response))
}

/// Rename a category
///
/// PATCH /goal_category/:category_id
pub async fn update_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CategoryIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateCategoryRequest>,
) -> ApiResult<Json<CategoryResponse>> {
    let service = CategoryService::new(state.service_context());
    let response = service
        .update_category(auth.user_id, path.category_id()?, request)
        .await?;
    Ok(Json(response))
}

/// Soft-delete a category; the row remains
///
/// DELETE /goal_category/:category_id
pub async fn delete_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CategoryIdPath>,
) -> ApiResult<NoContent> {
    let service = CategoryService::new(state.service_context());
    service
        .delete_category(auth.user_id, path.category_id()?)
        .await?;
    Ok(NoContent)
}
