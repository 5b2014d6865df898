//! Goal comment entity

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Comment left on a goal by its owner
///
/// Unlike categories and goals, comments are hard-deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalComment {
    pub id: Snowflake,
    pub goal_id: Snowflake,
    pub user_id: Snowflake,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GoalComment {
    /// Create a new comment
    pub fn new(id: Snowflake, goal_id: Snowflake, user_id: Snowflake, text: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            goal_id,
            user_id,
            text,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if a user is the comment author
    #[inline]
    pub fn is_owner(&self, user_id: Snowflake) -> bool {
        self.user_id == user_id
    }

    /// Edit the comment text
    pub fn set_text(&mut self, text: String) {
        self.text = text;
        self.updated_at = Utc::now();
    }
}
