//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Board, BoardParticipant, Goal, GoalCategory, GoalComment, TgAccount, User};
use crate::error::DomainError;
use crate::value_objects::{BoardRole, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if a username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Create a new user with their password hash
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update an existing user's profile fields
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Replace the stored password hash
    async fn update_password(&self, id: Snowflake, password_hash: &str) -> RepoResult<()>;
}

// ============================================================================
// Board Repository
// ============================================================================

#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Find a non-deleted board by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Board>>;

    /// List non-deleted boards where the user participates
    async fn find_by_participant(&self, user_id: Snowflake) -> RepoResult<Vec<Board>>;

    /// Create a new board
    async fn create(&self, board: &Board) -> RepoResult<()>;

    /// Update board fields
    async fn update(&self, board: &Board) -> RepoResult<()>;

    /// Soft-delete the board, soft-delete its categories, and archive the
    /// goals inside them, atomically
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Participant Repository
// ============================================================================

#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Find the participant record for a user on a board
    async fn find(&self, board_id: Snowflake, user_id: Snowflake)
        -> RepoResult<Option<BoardParticipant>>;

    /// The acting user's role on a board, if any
    async fn role_of(&self, board_id: Snowflake, user_id: Snowflake)
        -> RepoResult<Option<BoardRole>>;

    /// All participants of a board
    async fn find_by_board(&self, board_id: Snowflake) -> RepoResult<Vec<BoardParticipant>>;

    /// Add a participant
    async fn create(&self, participant: &BoardParticipant) -> RepoResult<()>;

    /// Change a participant's role
    async fn set_role(&self, board_id: Snowflake, user_id: Snowflake, role: BoardRole)
        -> RepoResult<()>;

    /// Remove a participant from a board
    async fn remove(&self, board_id: Snowflake, user_id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Category Repository
// ============================================================================

/// Query options for category listings
#[derive(Debug, Clone, Default)]
pub struct CategoryQuery {
    /// Case-insensitive title substring match
    pub search: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find a category by ID, including soft-deleted ones
    ///
    /// Deleted categories are still returned so callers can distinguish
    /// "deleted" from "absent".
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<GoalCategory>>;

    /// List non-deleted categories owned by a user, title ascending
    async fn find_owned(&self, user_id: Snowflake, query: &CategoryQuery)
        -> RepoResult<Vec<GoalCategory>>;

    /// Create a new category
    async fn create(&self, category: &GoalCategory) -> RepoResult<()>;

    /// Update category fields (including the soft-delete flag)
    async fn update(&self, category: &GoalCategory) -> RepoResult<()>;
}

// ============================================================================
// Goal Repository
// ============================================================================

/// Sort order for goal listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoalOrdering {
    #[default]
    TitleAsc,
    CreatedAsc,
    CreatedDesc,
}

/// Query options for goal listings
#[derive(Debug, Clone, Default)]
pub struct GoalQuery {
    /// Case-insensitive substring match over title and description
    pub search: Option<String>,
    pub due_date_from: Option<DateTime<Utc>>,
    pub due_date_to: Option<DateTime<Utc>>,
    pub ordering: GoalOrdering,
    pub limit: i64,
    pub offset: i64,
}

#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Find a goal by ID, regardless of status
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Goal>>;

    /// List a user's goals excluding archived ones and goals whose
    /// category is soft-deleted
    async fn find_active(&self, user_id: Snowflake, query: &GoalQuery) -> RepoResult<Vec<Goal>>;

    /// Create a new goal
    async fn create(&self, goal: &Goal) -> RepoResult<()>;

    /// Update goal fields
    async fn update(&self, goal: &Goal) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find a comment by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<GoalComment>>;

    /// List a user's comments, newest first, optionally filtered by goal
    async fn find_by_user(
        &self,
        user_id: Snowflake,
        goal_id: Option<Snowflake>,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<GoalComment>>;

    /// Create a new comment
    async fn create(&self, comment: &GoalComment) -> RepoResult<()>;

    /// Update comment text
    async fn update(&self, comment: &GoalComment) -> RepoResult<()>;

    /// Hard-delete a comment
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Telegram Account Repository
// ============================================================================

#[async_trait]
pub trait TgAccountRepository: Send + Sync {
    /// Find by Telegram's numeric user id
    async fn find_by_tg_user_id(&self, tg_user_id: i64) -> RepoResult<Option<TgAccount>>;

    /// Find by a pending verification code
    async fn find_by_verification_code(&self, code: &str) -> RepoResult<Option<TgAccount>>;

    /// Create a new (unlinked) account record
    async fn create(&self, account: &TgAccount) -> RepoResult<()>;

    /// Persist link state and verification code changes
    async fn update(&self, account: &TgAccount) -> RepoResult<()>;
}

// ============================================================================
// Refresh Token Repository
// ============================================================================

/// Stored refresh-token session record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTokenRecord {
    pub user_id: Snowflake,
    pub session_id: String,
    pub expires_at: DateTime<Utc>,
}

#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Store a refresh token session
    async fn store(&self, token: &str, record: &RefreshTokenRecord) -> RepoResult<()>;

    /// Look up a non-expired refresh token
    async fn find(&self, token: &str) -> RepoResult<Option<RefreshTokenRecord>>;

    /// Revoke a refresh token
    async fn revoke(&self, token: &str) -> RepoResult<()>;
}
