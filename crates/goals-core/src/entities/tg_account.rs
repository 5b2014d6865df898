//! Telegram account link - external chat identity tied to an internal user

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::value_objects::Snowflake;

/// Length of generated verification codes
const VERIFICATION_CODE_LEN: usize = 12;

/// Link between a Telegram identity and an internal user account
///
/// Created unlinked on first contact. Every unauthenticated message
/// regenerates the verification code; linking is a one-way transition that
/// clears the pending code permanently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TgAccount {
    pub id: Snowflake,
    /// Telegram's numeric user id, unique per external identity
    pub tg_user_id: i64,
    /// Chat to reply into
    pub tg_chat_id: i64,
    pub tg_username: Option<String>,
    /// Internal user once verified, `None` while unlinked
    pub user_id: Option<Snowflake>,
    pub verification_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TgAccount {
    /// Create a fresh, unlinked account record for an external identity
    pub fn new(id: Snowflake, tg_user_id: i64, tg_chat_id: i64, tg_username: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            tg_user_id,
            tg_chat_id,
            tg_username,
            user_id: None,
            verification_code: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the account has been linked to an internal user
    #[inline]
    pub fn is_linked(&self) -> bool {
        self.user_id.is_some()
    }

    /// Issue a new verification code, replacing any pending one
    ///
    /// There is deliberately no expiry or attempt limit on codes; every
    /// unauthenticated message gets a fresh one.
    pub fn issue_verification_code(&mut self) -> &str {
        self.verification_code = Some(generate_verification_code());
        self.updated_at = Utc::now();
        self.verification_code.as_deref().unwrap_or_default()
    }

    /// Bind the account to an internal user and clear the pending code
    pub fn link(&mut self, user_id: Snowflake) {
        self.user_id = Some(user_id);
        self.verification_code = None;
        self.updated_at = Utc::now();
    }
}

/// Generate a random alphanumeric verification code
pub fn generate_verification_code() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();
    (0..VERIFICATION_CODE_LEN)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}
