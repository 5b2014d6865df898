//! PostgreSQL implementation of GoalRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use goals_core::entities::Goal;
use goals_core::traits::{GoalOrdering, GoalQuery, GoalRepository, RepoResult};
use goals_core::value_objects::{GoalStatus, Snowflake};

use crate::models::GoalModel;

use super::error::{goal_not_found, map_db_error};

/// PostgreSQL implementation of GoalRepository
#[derive(Clone)]
pub struct PgGoalRepository {
    pool: PgPool,
}

impl PgGoalRepository {
    /// Create a new PgGoalRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn order_clause(ordering: GoalOrdering) -> &'static str {
    match ordering {
        GoalOrdering::TitleAsc => "g.title ASC",
        GoalOrdering::CreatedAsc => "g.created_at ASC",
        GoalOrdering::CreatedDesc => "g.created_at DESC",
    }
}

#[async_trait]
impl GoalRepository for PgGoalRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Goal>> {
        let result = sqlx::query_as::<_, GoalModel>(
            r"
            SELECT id, category_id, user_id, title, description, due_date,
                   status, priority, created_at, updated_at
            FROM goals
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Goal::from))
    }

    #[instrument(skip(self))]
    async fn find_active(&self, user_id: Snowflake, query: &GoalQuery) -> RepoResult<Vec<Goal>> {
        // Only the ORDER BY fragment varies; everything else binds, so the
        // three query texts stay cacheable.
        let sql = format!(
            r"
            SELECT g.id, g.category_id, g.user_id, g.title, g.description, g.due_date,
                   g.status, g.priority, g.created_at, g.updated_at
            FROM goals g
            JOIN goal_categories c ON c.id = g.category_id
            WHERE g.user_id = $1
              AND g.status <> $2
              AND c.is_deleted = FALSE
              AND ($3::text IS NULL
                   OR g.title ILIKE '%' || $3 || '%'
                   OR g.description ILIKE '%' || $3 || '%')
              AND ($4::timestamptz IS NULL OR g.due_date >= $4)
              AND ($5::timestamptz IS NULL OR g.due_date <= $5)
            ORDER BY {}
            LIMIT $6 OFFSET $7
            ",
            order_clause(query.ordering)
        );

        let results = sqlx::query_as::<_, GoalModel>(&sql)
            .bind(user_id.into_inner())
            .bind(GoalStatus::Archived.as_i16())
            .bind(query.search.as_deref())
            .bind(query.due_date_from)
            .bind(query.due_date_to)
            .bind(query.limit)
            .bind(query.offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Goal::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, goal: &Goal) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO goals (id, category_id, user_id, title, description, due_date,
                               status, priority, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(goal.id.into_inner())
        .bind(goal.category_id.into_inner())
        .bind(goal.user_id.into_inner())
        .bind(&goal.title)
        .bind(&goal.description)
        .bind(goal.due_date)
        .bind(goal.status.as_i16())
        .bind(goal.priority.as_i16())
        .bind(goal.created_at)
        .bind(goal.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, goal: &Goal) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE goals
            SET category_id = $2, title = $3, description = $4, due_date = $5,
                status = $6, priority = $7, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(goal.id.into_inner())
        .bind(goal.category_id.into_inner())
        .bind(&goal.title)
        .bind(&goal.description)
        .bind(goal.due_date)
        .bind(goal.status.as_i16())
        .bind(goal.priority.as_i16())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(goal_not_found(goal.id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgGoalRepository>();
    }

    #[test]
    fn test_order_clause_variants() {
        assert_eq!(order_clause(GoalOrdering::TitleAsc), "g.title ASC");
        assert_eq!(order_clause(GoalOrdering::CreatedAsc), "g.created_at ASC");
        assert_eq!(order_clause(GoalOrdering::CreatedDesc), "g.created_at DESC");
    }
}
