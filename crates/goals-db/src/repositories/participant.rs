//! PostgreSQL implementation of ParticipantRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use goals_core::entities::BoardParticipant;
use goals_core::error::DomainError;
use goals_core::traits::{ParticipantRepository, RepoResult};
use goals_core::value_objects::{BoardRole, Snowflake};

use crate::models::ParticipantModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of ParticipantRepository
#[derive(Clone)]
pub struct PgParticipantRepository {
    pool: PgPool,
}

impl PgParticipantRepository {
    /// Create a new PgParticipantRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParticipantRepository for PgParticipantRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        board_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<BoardParticipant>> {
        let result = sqlx::query_as::<_, ParticipantModel>(
            r"
            SELECT board_id, user_id, role, created_at, updated_at
            FROM board_participants
            WHERE board_id = $1 AND user_id = $2
            ",
        )
        .bind(board_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(BoardParticipant::from))
    }

    #[instrument(skip(self))]
    async fn role_of(
        &self,
        board_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<BoardRole>> {
        let result = sqlx::query_scalar::<_, i16>(
            r"
            SELECT role FROM board_participants
            WHERE board_id = $1 AND user_id = $2
            ",
        )
        .bind(board_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(|r| BoardRole::from_i16(r).unwrap_or(BoardRole::Reader)))
    }

    #[instrument(skip(self))]
    async fn find_by_board(&self, board_id: Snowflake) -> RepoResult<Vec<BoardParticipant>> {
        let results = sqlx::query_as::<_, ParticipantModel>(
            r"
            SELECT bp.board_id, bp.user_id, bp.role, bp.created_at, bp.updated_at
            FROM board_participants bp
            JOIN users u ON u.id = bp.user_id
            WHERE bp.board_id = $1
            ORDER BY u.username ASC
            ",
        )
        .bind(board_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(BoardParticipant::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, participant: &BoardParticipant) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO board_participants (board_id, user_id, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(participant.board_id.into_inner())
        .bind(participant.user_id.into_inner())
        .bind(participant.role.as_i16())
        .bind(participant.created_at)
        .bind(participant.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyParticipant))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_role(
        &self,
        board_id: Snowflake,
        user_id: Snowflake,
        role: BoardRole,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE board_participants
            SET role = $3, updated_at = NOW()
            WHERE board_id = $1 AND user_id = $2
            ",
        )
        .bind(board_id.into_inner())
        .bind(user_id.into_inner())
        .bind(role.as_i16())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(user_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, board_id: Snowflake, user_id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM board_participants
            WHERE board_id = $1 AND user_id = $2
            ",
        )
        .bind(board_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(user_id));
        }

        Ok(())
    }
}
