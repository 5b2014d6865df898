//! PostgreSQL implementation of CategoryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use goals_core::entities::GoalCategory;
use goals_core::traits::{CategoryQuery, CategoryRepository, RepoResult};
use goals_core::value_objects::Snowflake;

use crate::models::CategoryModel;

use super::error::{category_not_found, map_db_error};

/// PostgreSQL implementation of CategoryRepository
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    /// Create a new PgCategoryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    /// Returns soft-deleted rows too; callers decide whether a deleted
    /// category is an error or just invisible.
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<GoalCategory>> {
        let result = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, board_id, user_id, title, is_deleted, created_at, updated_at
            FROM goal_categories
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(GoalCategory::from))
    }

    #[instrument(skip(self))]
    async fn find_owned(
        &self,
        user_id: Snowflake,
        query: &CategoryQuery,
    ) -> RepoResult<Vec<GoalCategory>> {
        let results = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, board_id, user_id, title, is_deleted, created_at, updated_at
            FROM goal_categories
            WHERE user_id = $1
              AND is_deleted = FALSE
              AND ($2::text IS NULL OR title ILIKE '%' || $2 || '%')
            ORDER BY title ASC
            LIMIT $3 OFFSET $4
            ",
        )
        .bind(user_id.into_inner())
        .bind(query.search.as_deref())
        .bind(query.limit)
        .bind(query.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(GoalCategory::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, category: &GoalCategory) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO goal_categories (id, board_id, user_id, title, is_deleted, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(category.id.into_inner())
        .bind(category.board_id.into_inner())
        .bind(category.user_id.into_inner())
        .bind(&category.title)
        .bind(category.is_deleted)
        .bind(category.created_at)
        .bind(category.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, category: &GoalCategory) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE goal_categories
            SET title = $2, is_deleted = $3, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(category.id.into_inner())
        .bind(&category.title)
        .bind(category.is_deleted)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(category_not_found(category.id));
        }

        Ok(())
    }
}
