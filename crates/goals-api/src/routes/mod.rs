//! Route definitions
//!
//! All API routes organized by domain.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{
    auth, boards, categories, comments, goals, health, users, verification,
};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(core_routes())
        .merge(board_routes())
        .merge(category_routes())
        .merge(goal_routes())
        .merge(comment_routes())
        .merge(bot_routes())
}

/// Health check routes (mounted alongside the API routes)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Account routes: auth and profile
fn core_routes() -> Router<AppState> {
    Router::new()
        .route("/core/signup", post(auth::signup))
        .route("/core/login", post(auth::login))
        .route("/core/refresh", post(auth::refresh_token))
        .route("/core/logout", post(auth::logout))
        .route("/core/profile", get(users::get_profile))
        .route("/core/profile", patch(users::update_profile))
        .route("/core/update_password", put(users::update_password))
}

/// Board routes
fn board_routes() -> Router<AppState> {
    Router::new()
        .route("/board/create", post(boards::create_board))
        .route("/board/list", get(boards::list_boards))
        .route("/board/:board_id", get(boards::get_board))
        .route("/board/:board_id", patch(boards::update_board))
        .route("/board/:board_id", delete(boards::delete_board))
        .route("/board/:board_id/participants", get(boards::list_participants))
        .route("/board/:board_id/participants", put(boards::set_participants))
}

/// Goal category routes
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/goal_category/create", post(categories::create_category))
        .route("/goal_category/list", get(categories::list_categories))
        .route("/goal_category/:category_id", get(categories::get_category))
        .route("/goal_category/:category_id", patch(categories::update_category))
        .route("/goal_category/:category_id", delete(categories::delete_category))
}

/// Goal routes
fn goal_routes() -> Router<AppState> {
    Router::new()
        .route("/goal/create", post(goals::create_goal))
        .route("/goal/list", get(goals::list_goals))
        .route("/goal/:goal_id", get(goals::get_goal))
        .route("/goal/:goal_id", patch(goals::update_goal))
        .route("/goal/:goal_id", delete(goals::archive_goal))
}

/// Goal comment routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/goal_comment/create", post(comments::create_comment))
        .route("/goal_comment/list", get(comments::list_comments))
        .route("/goal_comment/:comment_id", get(comments::get_comment))
        .route("/goal_comment/:comment_id", patch(comments::update_comment))
        .route("/goal_comment/:comment_id", delete(comments::delete_comment))
}

/// Telegram verification routes
fn bot_routes() -> Router<AppState> {
    Router::new().route("/bot/verify", patch(verification::verify))
}
