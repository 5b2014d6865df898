//! PostgreSQL implementation of TgAccountRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use goals_core::entities::TgAccount;
use goals_core::error::DomainError;
use goals_core::traits::{RepoResult, TgAccountRepository};

use crate::models::TgAccountModel;

use super::error::map_db_error;

/// PostgreSQL implementation of TgAccountRepository
#[derive(Clone)]
pub struct PgTgAccountRepository {
    pool: PgPool,
}

impl PgTgAccountRepository {
    /// Create a new PgTgAccountRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TgAccountRepository for PgTgAccountRepository {
    #[instrument(skip(self))]
    async fn find_by_tg_user_id(&self, tg_user_id: i64) -> RepoResult<Option<TgAccount>> {
        let result = sqlx::query_as::<_, TgAccountModel>(
            r"
            SELECT id, tg_user_id, tg_chat_id, tg_username, user_id, verification_code,
                   created_at, updated_at
            FROM tg_accounts
            WHERE tg_user_id = $1
            ",
        )
        .bind(tg_user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(TgAccount::from))
    }

    #[instrument(skip(self, code))]
    async fn find_by_verification_code(&self, code: &str) -> RepoResult<Option<TgAccount>> {
        let result = sqlx::query_as::<_, TgAccountModel>(
            r"
            SELECT id, tg_user_id, tg_chat_id, tg_username, user_id, verification_code,
                   created_at, updated_at
            FROM tg_accounts
            WHERE verification_code = $1 AND user_id IS NULL
            ",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(TgAccount::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, account: &TgAccount) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO tg_accounts (id, tg_user_id, tg_chat_id, tg_username, user_id,
                                     verification_code, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(account.id.into_inner())
        .bind(account.tg_user_id)
        .bind(account.tg_chat_id)
        .bind(&account.tg_username)
        .bind(account.user_id.map(|id| id.into_inner()))
        .bind(&account.verification_code)
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, account: &TgAccount) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE tg_accounts
            SET tg_chat_id = $2, tg_username = $3, user_id = $4,
                verification_code = $5, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(account.id.into_inner())
        .bind(account.tg_chat_id)
        .bind(&account.tg_username)
        .bind(account.user_id.map(|id| id.into_inner()))
        .bind(&account.verification_code)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::TgAccountNotFound);
        }

        Ok(())
    }
}
