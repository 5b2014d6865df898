//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Snowflake references arrive as strings, matching the response encoding.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

/// Default page size for list endpoints
pub const DEFAULT_LIMIT: i64 = 20;

/// Hard ceiling for page size
pub const MAX_LIMIT: i64 = 100;

// ============================================================================
// Auth Requests
// ============================================================================

/// User signup request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    /// Must match `password`
    pub password_repeat: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub email: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout request (refresh token to revoke)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

// ============================================================================
// User Requests
// ============================================================================

/// Update profile request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: Option<String>,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

/// Change password request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    pub old_password: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub new_password: String,
}

// ============================================================================
// Board Requests
// ============================================================================

/// Create board request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBoardRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,
}

/// Update board request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateBoardRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,
}

/// One desired participant entry in a participants update
#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantUpdate {
    /// Username of the participant
    pub user: String,

    /// Integer role encoding; owner (1) cannot be assigned here
    pub role: i16,
}

/// Replace the participant set of a board
///
/// The owner is implicit and never part of the submitted list.
#[derive(Debug, Clone, Deserialize)]
pub struct SetParticipantsRequest {
    pub participants: Vec<ParticipantUpdate>,
}

// ============================================================================
// Category Requests
// ============================================================================

/// Create category request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    /// Board ID (Snowflake as string)
    pub board: String,

    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,
}

/// Update category request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,
}

// ============================================================================
// Goal Requests
// ============================================================================

/// Create goal request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGoalRequest {
    /// Category ID (Snowflake as string)
    pub category: String,

    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    pub description: Option<String>,

    pub due_date: Option<DateTime<Utc>>,

    /// Integer status encoding; omitted → to_do
    pub status: Option<i16>,

    /// Integer priority encoding; omitted → medium
    pub priority: Option<i16>,
}

/// Partial goal patch
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateGoalRequest {
    /// Move the goal into another category (Snowflake as string)
    pub category: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    pub description: Option<String>,

    pub due_date: Option<DateTime<Utc>>,

    pub status: Option<i16>,

    pub priority: Option<i16>,
}

/// Query string for goal listings
#[derive(Debug, Clone, Deserialize, Default)]
pub struct GoalListQuery {
    /// Case-insensitive substring over title and description
    pub search: Option<String>,

    pub due_date_from: Option<DateTime<Utc>>,

    pub due_date_to: Option<DateTime<Utc>>,

    /// "title" (default), "created", or "-created"
    pub ordering: Option<String>,

    pub limit: Option<i64>,

    pub offset: Option<i64>,
}

impl GoalListQuery {
    /// Effective page size, clamped to the ceiling
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Effective offset, never negative
    #[must_use]
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

/// Query string for category listings
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ListQuery {
    pub search: Option<String>,

    pub limit: Option<i64>,

    pub offset: Option<i64>,
}

impl ListQuery {
    /// Effective page size, clamped to the ceiling
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Effective offset, never negative
    #[must_use]
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    /// Goal ID (Snowflake as string)
    pub goal: String,

    #[validate(length(min = 1, max = 4000, message = "Text must be 1-4000 characters"))]
    pub text: String,
}

/// Update comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 4000, message = "Text must be 1-4000 characters"))]
    pub text: String,
}

/// Query string for comment listings
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CommentListQuery {
    /// Restrict to a single goal (Snowflake as string)
    pub goal: Option<String>,

    pub limit: Option<i64>,

    pub offset: Option<i64>,
}

impl CommentListQuery {
    /// Effective page size, clamped to the ceiling
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Effective offset, never negative
    #[must_use]
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

// ============================================================================
// Verification Requests
// ============================================================================

/// Confirm a pending bot verification code
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ConfirmVerificationRequest {
    #[validate(length(min = 1, message = "Verification code is required"))]
    pub verification_code: String,
}
