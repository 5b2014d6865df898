//! Goal comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the goal_comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub goal_id: i64,
    pub user_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
