//! Board entity - a workspace grouping categories and participants

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Board (workspace) entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub id: Snowflake,
    pub title: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    /// Create a new Board
    pub fn new(id: Snowflake, title: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the board title
    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    /// Mark the board as deleted (soft-delete, never removed)
    pub fn mark_deleted(&mut self) {
        self.is_deleted = true;
        self.updated_at = Utc::now();
    }
}
