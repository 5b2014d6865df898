//! Board and participant database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the boards table
#[derive(Debug, Clone, FromRow)]
pub struct BoardModel {
    pub id: i64,
    pub title: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for the board_participants table
///
/// `role` holds the integer encoding of `BoardRole`.
#[derive(Debug, Clone, FromRow)]
pub struct ParticipantModel {
    pub board_id: i64,
    pub user_id: i64,
    pub role: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
