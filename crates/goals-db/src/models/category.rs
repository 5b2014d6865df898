//! Goal category database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the goal_categories table
#[derive(Debug, Clone, FromRow)]
pub struct CategoryModel {
    pub id: i64,
    pub board_id: i64,
    pub user_id: i64,
    pub title: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
