//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // Not found. Ownership-filtered lookups surface the same way as truly
    // absent rows so existence is never leaked.
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Board not found: {0}")]
    BoardNotFound(Snowflake),

    #[error("Category not found: {0}")]
    CategoryNotFound(Snowflake),

    #[error("Goal not found: {0}")]
    GoalNotFound(Snowflake),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    #[error("Telegram account not found")]
    TgAccountNotFound,

    // Validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    // Authorization
    #[error("Permission denied: {0}")]
    PermissionDenied(&'static str),

    // Business rules
    #[error("not allowed in deleted category")]
    CategoryDeleted,

    // Conflicts
    #[error("Username already taken")]
    UsernameAlreadyExists,

    #[error("Already a participant of this board")]
    AlreadyParticipant,

    // Infrastructure (wrapped)
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Check if this is a not-found error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::BoardNotFound(_)
                | Self::CategoryNotFound(_)
                | Self::GoalNotFound(_)
                | Self::CommentNotFound(_)
                | Self::TgAccountNotFound
        )
    }

    /// Check if this is an authorization error
    #[must_use]
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::PermissionDenied(_))
    }

    /// Check if this is a validation or business-rule error
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidUsername(_) | Self::CategoryDeleted
        )
    }

    /// Check if this is a conflict error
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UsernameAlreadyExists | Self::AlreadyParticipant)
    }

    /// Stable machine-readable code for API responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_)
            | Self::BoardNotFound(_)
            | Self::CategoryNotFound(_)
            | Self::GoalNotFound(_)
            | Self::CommentNotFound(_)
            | Self::TgAccountNotFound => "NOT_FOUND",
            Self::ValidationError(_) | Self::InvalidUsername(_) => "VALIDATION_ERROR",
            Self::PermissionDenied(_) => "PERMISSION_DENIED",
            Self::CategoryDeleted => "CATEGORY_DELETED",
            Self::UsernameAlreadyExists | Self::AlreadyParticipant => "CONFLICT",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }
}
