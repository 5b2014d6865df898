//! Goal database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the goals table
///
/// `status` and `priority` hold the integer encodings of the domain enums.
#[derive(Debug, Clone, FromRow)]
pub struct GoalModel {
    pub id: i64,
    pub category_id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub status: i16,
    pub priority: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
