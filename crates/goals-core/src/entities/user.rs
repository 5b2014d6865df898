//! User entity - an account holder

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User account
///
/// The password hash is not part of the entity; it travels separately
/// through the repository so it never leaks into responses or logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, username: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Full display name, falling back to the username
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }

    /// Update the username
    pub fn set_username(&mut self, username: String) {
        self.username = username;
        self.updated_at = Utc::now();
    }
}
