//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use goals_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with a board id
#[derive(Debug, serde::Deserialize)]
pub struct BoardIdPath {
    pub board_id: String,
}

impl BoardIdPath {
    /// Parse board_id as Snowflake
    pub fn board_id(&self) -> Result<Snowflake, ApiError> {
        self.board_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid board_id format"))
    }
}

/// Path parameters with a category id
#[derive(Debug, serde::Deserialize)]
pub struct CategoryIdPath {
    pub category_id: String,
}

impl CategoryIdPath {
    /// Parse category_id as Snowflake
    pub fn category_id(&self) -> Result<Snowflake, ApiError> {
        self.category_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid category_id format"))
    }
}

/// Path parameters with a goal id
#[derive(Debug, serde::Deserialize)]
pub struct GoalIdPath {
    pub goal_id: String,
}

impl GoalIdPath {
    /// Parse goal_id as Snowflake
    pub fn goal_id(&self) -> Result<Snowflake, ApiError> {
        self.goal_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid goal_id format"))
    }
}

/// Path parameters with a comment id
#[derive(Debug, serde::Deserialize)]
pub struct CommentIdPath {
    pub comment_id: String,
}

impl CommentIdPath {
    /// Parse comment_id as Snowflake
    pub fn comment_id(&self) -> Result<Snowflake, ApiError> {
        self.comment_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid comment_id format"))
    }
}
