//! User persistence boundary.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use cinelog_core::error::DomainError;

use crate::model::User;

/// Storage collaborator for user accounts. The relational store in a full
/// deployment implements this; tests and the bundled binary use the
/// in-memory variant.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new account.
    async fn create(&self, user: &User) -> Result<(), DomainError>;

    /// Fetch by identifier.
    async fn get_by_id(&self, id: &str) -> Result<Option<User>, DomainError>;

    /// Fetch by unique username.
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Fetch by unique email.
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Whether an account with this username or email already exists.
    async fn exists(&self, username: &str, email: &str) -> Result<bool, DomainError>;

    /// Overwrite an existing account.
    async fn update(&self, user: &User) -> Result<(), DomainError>;

    /// Remove an account.
    async fn delete(&self, id: &str) -> Result<(), DomainError>;

    /// All accounts, unordered.
    async fn list(&self) -> Result<Vec<User>, DomainError>;
}

/// Process-local user store.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, User>>, DomainError> {
        self.users
            .lock()
            .map_err(|_| DomainError::Infrastructure("user store poisoned".into()))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> Result<(), DomainError> {
        self.lock()?.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<User>, DomainError> {
        Ok(self.lock()?.get(id).cloned())
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .lock()?
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .lock()?
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn exists(&self, username: &str, email: &str) -> Result<bool, DomainError> {
        Ok(self
            .lock()?
            .values()
            .any(|user| user.username == username || user.email == email))
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.lock()?;
        if !users.contains_key(&user.id) {
            return Err(DomainError::NotFound(format!("user {}", user.id)));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.lock()?
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("user {id}")))
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.lock()?.values().cloned().collect())
    }
}
