//! Telegram account database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the tg_accounts table
#[derive(Debug, Clone, FromRow)]
pub struct TgAccountModel {
    pub id: i64,
    pub tg_user_id: i64,
    pub tg_chat_id: i64,
    pub tg_username: Option<String>,
    pub user_id: Option<i64>,
    pub verification_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TgAccountModel {
    /// Check if the account has been linked to an internal user
    #[inline]
    pub fn is_linked(&self) -> bool {
        self.user_id.is_some()
    }
}
