//! PostgreSQL implementation of BoardRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use goals_core::entities::Board;
use goals_core::traits::{BoardRepository, RepoResult};
use goals_core::value_objects::{GoalStatus, Snowflake};

use crate::models::BoardModel;

use super::error::{board_not_found, map_db_error};

/// PostgreSQL implementation of BoardRepository
#[derive(Clone)]
pub struct PgBoardRepository {
    pool: PgPool,
}

impl PgBoardRepository {
    /// Create a new PgBoardRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BoardRepository for PgBoardRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Board>> {
        let result = sqlx::query_as::<_, BoardModel>(
            r"
            SELECT id, title, is_deleted, created_at, updated_at
            FROM boards
            WHERE id = $1 AND is_deleted = FALSE
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Board::from))
    }

    #[instrument(skip(self))]
    async fn find_by_participant(&self, user_id: Snowflake) -> RepoResult<Vec<Board>> {
        let results = sqlx::query_as::<_, BoardModel>(
            r"
            SELECT b.id, b.title, b.is_deleted, b.created_at, b.updated_at
            FROM boards b
            JOIN board_participants bp ON bp.board_id = b.id
            WHERE bp.user_id = $1 AND b.is_deleted = FALSE
            ORDER BY b.title ASC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Board::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, board: &Board) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO boards (id, title, is_deleted, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(board.id.into_inner())
        .bind(&board.title)
        .bind(board.is_deleted)
        .bind(board.created_at)
        .bind(board.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, board: &Board) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE boards
            SET title = $2, updated_at = NOW()
            WHERE id = $1 AND is_deleted = FALSE
            ",
        )
        .bind(board.id.into_inner())
        .bind(&board.title)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(board_not_found(board.id));
        }

        Ok(())
    }

    /// Soft-deletes the board and everything under it in one transaction:
    /// the board row, its categories, and the goals in those categories
    /// (which become archived rather than flagged).
    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE boards
            SET is_deleted = TRUE, updated_at = NOW()
            WHERE id = $1 AND is_deleted = FALSE
            ",
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(board_not_found(id));
        }

        sqlx::query(
            r"
            UPDATE goal_categories
            SET is_deleted = TRUE, updated_at = NOW()
            WHERE board_id = $1 AND is_deleted = FALSE
            ",
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            UPDATE goals
            SET status = $2, updated_at = NOW()
            WHERE category_id IN (SELECT id FROM goal_categories WHERE board_id = $1)
              AND status <> $2
            ",
        )
        .bind(id.into_inner())
        .bind(GoalStatus::Archived.as_i16())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgBoardRepository>();
    }
}
