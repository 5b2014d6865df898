//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility;
//! status, priority, and role fields keep their integer encodings.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: ProfileResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: ProfileResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

/// The caller's own profile
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Board Responses
// ============================================================================

/// A board
#[derive(Debug, Clone, Serialize)]
pub struct BoardResponse {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A participant entry on a board
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantResponse {
    pub user_id: String,
    pub username: String,
    pub role: i16,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Category Responses
// ============================================================================

/// A goal category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: String,
    pub board: String,
    pub user: String,
    pub title: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Goal Responses
// ============================================================================

/// A goal
#[derive(Debug, Clone, Serialize)]
pub struct GoalResponse {
    pub id: String,
    pub category: String,
    pub user: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub status: i16,
    pub priority: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// A goal comment
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub goal: String,
    pub user: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Verification Responses
// ============================================================================

/// Result of a confirmed bot verification
#[derive(Debug, Clone, Serialize)]
pub struct VerificationResponse {
    pub tg_username: Option<String>,
    pub linked: bool,
}
