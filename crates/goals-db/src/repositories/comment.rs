//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use goals_core::entities::GoalComment;
use goals_core::traits::{CommentRepository, RepoResult};
use goals_core::value_objects::Snowflake;

use crate::models::CommentModel;

use super::error::{comment_not_found, map_db_error};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<GoalComment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, goal_id, user_id, text, created_at, updated_at
            FROM goal_comments
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(GoalComment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(
        &self,
        user_id: Snowflake,
        goal_id: Option<Snowflake>,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<GoalComment>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, goal_id, user_id, text, created_at, updated_at
            FROM goal_comments
            WHERE user_id = $1
              AND ($2::bigint IS NULL OR goal_id = $2)
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            ",
        )
        .bind(user_id.into_inner())
        .bind(goal_id.map(Snowflake::into_inner))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(GoalComment::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, comment: &GoalComment) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO goal_comments (id, goal_id, user_id, text, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(comment.id.into_inner())
        .bind(comment.goal_id.into_inner())
        .bind(comment.user_id.into_inner())
        .bind(&comment.text)
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, comment: &GoalComment) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE goal_comments
            SET text = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(comment.id.into_inner())
        .bind(&comment.text)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(comment.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM goal_comments WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(id));
        }

        Ok(())
    }
}
