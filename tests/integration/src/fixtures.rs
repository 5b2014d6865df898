//! Test fixtures and data generators
//!
//! Wire-shaped request and response types plus unique data generators
//! for end-to-end tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Signup request
#[derive(Debug, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub password_repeat: String,
}

impl SignupRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            password: "TestPass123".to_string(),
            password_repeat: "TestPass123".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_signup(signup: &SignupRequest) -> Self {
        Self {
            username: signup.username.clone(),
            password: signup.password.clone(),
        }
    }
}

/// Token refresh request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout request
#[derive(Debug, Serialize)]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

/// Auth response with tokens
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: ProfileResponse,
}

/// Profile response
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: String,
}

/// Create board request
#[derive(Debug, Serialize)]
pub struct CreateBoardRequest {
    pub title: String,
}

impl CreateBoardRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test Board {suffix}"),
        }
    }
}

/// Board response
#[derive(Debug, Deserialize)]
pub struct BoardResponse {
    pub id: String,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
}

/// One participant entry
#[derive(Debug, Serialize)]
pub struct ParticipantUpdate {
    pub user: String,
    pub role: i16,
}

/// Replace the participant set of a board
#[derive(Debug, Serialize)]
pub struct SetParticipantsRequest {
    pub participants: Vec<ParticipantUpdate>,
}

/// Participant response
#[derive(Debug, Deserialize)]
pub struct ParticipantResponse {
    pub user_id: String,
    pub username: String,
    pub role: i16,
    pub created_at: String,
}

/// Create category request
#[derive(Debug, Serialize)]
pub struct CreateCategoryRequest {
    pub board: String,
    pub title: String,
}

impl CreateCategoryRequest {
    pub fn unique(board_id: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            board: board_id.to_string(),
            title: format!("Test Category {suffix}"),
        }
    }
}

/// Category response
#[derive(Debug, Deserialize)]
pub struct CategoryResponse {
    pub id: String,
    pub board: String,
    pub user: String,
    pub title: String,
    pub is_deleted: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Create goal request
#[derive(Debug, Serialize)]
pub struct CreateGoalRequest {
    pub category: String,
    pub title: String,
    pub description: Option<String>,
}

impl CreateGoalRequest {
    pub fn simple(category_id: &str, title: &str) -> Self {
        Self {
            category: category_id.to_string(),
            title: title.to_string(),
            description: None,
        }
    }
}

/// Goal response
#[derive(Debug, Deserialize)]
pub struct GoalResponse {
    pub id: String,
    pub category: String,
    pub user: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub status: i16,
    pub priority: i16,
    pub created_at: String,
    pub updated_at: String,
}

/// Create comment request
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub goal: String,
    pub text: String,
}

/// Comment response
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub goal: String,
    pub user: String,
    pub text: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
