//! PostgreSQL implementation of RefreshTokenRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use goals_core::traits::{RefreshTokenRecord, RefreshTokenRepository, RepoResult};

use crate::models::RefreshTokenModel;

use super::error::map_db_error;

/// PostgreSQL implementation of RefreshTokenRepository
///
/// Sessions live in their own table rather than in memory so that a
/// restart does not invalidate every logged-in client.
#[derive(Clone)]
pub struct PgRefreshTokenRepository {
    pool: PgPool,
}

impl PgRefreshTokenRepository {
    /// Create a new PgRefreshTokenRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RefreshTokenRepository for PgRefreshTokenRepository {
    #[instrument(skip(self, token))]
    async fn store(&self, token: &str, record: &RefreshTokenRecord) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO refresh_tokens (token, user_id, session_id, expires_at, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            ON CONFLICT (token)
            DO UPDATE SET user_id = $2, session_id = $3, expires_at = $4
            ",
        )
        .bind(token)
        .bind(record.user_id.into_inner())
        .bind(&record.session_id)
        .bind(record.expires_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, token))]
    async fn find(&self, token: &str) -> RepoResult<Option<RefreshTokenRecord>> {
        let result = sqlx::query_as::<_, RefreshTokenModel>(
            r"
            SELECT token, user_id, session_id, expires_at, created_at
            FROM refresh_tokens
            WHERE token = $1 AND expires_at > NOW()
            ",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(RefreshTokenRecord::from))
    }

    /// Revoking an unknown token is a no-op; logout must be idempotent.
    #[instrument(skip(self, token))]
    async fn revoke(&self, token: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            DELETE FROM refresh_tokens WHERE token = $1
            ",
        )
        .bind(token)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
