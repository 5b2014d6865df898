//! Board participant - the (board, user, role) membership record

use chrono::{DateTime, Utc};

use crate::value_objects::{BoardRole, Snowflake};

/// Membership of a user on a board, carrying their role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardParticipant {
    pub board_id: Snowflake,
    pub user_id: Snowflake,
    pub role: BoardRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BoardParticipant {
    /// Create a new participant record
    pub fn new(board_id: Snowflake, user_id: Snowflake, role: BoardRole) -> Self {
        let now = Utc::now();
        Self {
            board_id,
            user_id,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// The owner participant created alongside a new board
    pub fn owner(board_id: Snowflake, user_id: Snowflake) -> Self {
        Self::new(board_id, user_id, BoardRole::Owner)
    }

    /// Change the participant's role
    pub fn set_role(&mut self, role: BoardRole) {
        self.role = role;
        self.updated_at = Utc::now();
    }
}
