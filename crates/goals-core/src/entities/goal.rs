//! Goal entity

use chrono::{DateTime, Utc};

use crate::value_objects::{GoalPriority, GoalStatus, Snowflake};

/// A goal inside a category
///
/// Goals are never removed; "deleting" a goal transitions its status to
/// `Archived`. Archiving an already-archived goal is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub id: Snowflake,
    pub category_id: Snowflake,
    pub user_id: Snowflake,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub status: GoalStatus,
    pub priority: GoalPriority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    /// Create a new goal with default status and priority
    pub fn new(id: Snowflake, category_id: Snowflake, user_id: Snowflake, title: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            category_id,
            user_id,
            title,
            description: None,
            due_date: None,
            status: GoalStatus::default(),
            priority: GoalPriority::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if a user is the goal owner
    #[inline]
    pub fn is_owner(&self, user_id: Snowflake) -> bool {
        self.user_id == user_id
    }

    /// Whether the goal has been archived (the deletion state)
    #[inline]
    pub fn is_archived(&self) -> bool {
        self.status.is_archived()
    }

    /// Transition the goal into the archived state
    ///
    /// Returns `true` if the status changed, `false` if it was already
    /// archived.
    pub fn archive(&mut self) -> bool {
        if self.is_archived() {
            return false;
        }
        self.status = GoalStatus::Archived;
        self.updated_at = Utc::now();
        true
    }

    /// Refresh the update timestamp after a field patch
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
