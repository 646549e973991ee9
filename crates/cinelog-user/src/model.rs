//! User account entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new account with a generated identifier and current
    /// timestamps.
    #[must_use]
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            username: username.into(),
            email: email.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
