//! Goal category entity

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Category grouping goals on a board
///
/// Categories are soft-deleted via `is_deleted` so existing goals and
/// comments keep their referential history. A deleted category accepts no
/// new goals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalCategory {
    pub id: Snowflake,
    pub board_id: Snowflake,
    pub user_id: Snowflake,
    pub title: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GoalCategory {
    /// Create a new category owned by `user_id` on `board_id`
    pub fn new(id: Snowflake, board_id: Snowflake, user_id: Snowflake, title: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            board_id,
            user_id,
            title,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if a user is the category owner
    #[inline]
    pub fn is_owner(&self, user_id: Snowflake) -> bool {
        self.user_id == user_id
    }

    /// Update the category title
    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    /// Soft-delete the category; goals inside it are left untouched
    pub fn mark_deleted(&mut self) {
        self.is_deleted = true;
        self.updated_at = Utc::now();
    }
}
