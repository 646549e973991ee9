//! User application service: validate, write, then publish.

use std::sync::Arc;

use chrono::Utc;
use cinelog_bus::EventPublisher;
use cinelog_core::error::DomainError;
use cinelog_events::CinelogEvent;
use cinelog_events::user::{UserDeleted, UserRegistered, UserUpdated};

use crate::model::User;
use crate::repository::UserRepository;

/// Orchestrates user writes. Events are published after the repository write
/// succeeds; a publish failure here is logged and the operation still
/// succeeds, since the account state already changed.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    publisher: EventPublisher<CinelogEvent>,
}

impl UserService {
    #[must_use]
    pub fn new(repository: Arc<dyn UserRepository>, publisher: EventPublisher<CinelogEvent>) -> Self {
        Self {
            repository,
            publisher,
        }
    }

    /// Register a new account and emit `UserRegistered`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for empty input,
    /// `DomainError::AlreadyExists` if the username or email is taken, and
    /// repository errors as-is. A publish failure does not fail the
    /// registration.
    pub async fn register_user(
        &self,
        username: &str,
        email: &str,
    ) -> Result<User, DomainError> {
        if username.is_empty() {
            return Err(DomainError::Validation("username cannot be empty".into()));
        }
        if email.is_empty() {
            return Err(DomainError::Validation("email cannot be empty".into()));
        }

        if self.repository.exists(username, email).await? {
            return Err(DomainError::AlreadyExists(format!(
                "user with username '{username}' or email '{email}'"
            )));
        }

        let user = User::new(username, email);
        self.repository.create(&user).await?;
        tracing::info!(user_id = %user.id, username, "user registered");

        let event = UserRegistered::new(&user.id, &user.username, &user.email);
        if let Err(err) = self.publisher.publish(&event.into()).await {
            tracing::warn!(user_id = %user.id, error = %err, "failed to publish user registered event");
        }

        Ok(user)
    }

    /// Fetch an account by identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for an empty id and
    /// `DomainError::NotFound` if no such account exists.
    pub async fn get_user(&self, id: &str) -> Result<User, DomainError> {
        if id.is_empty() {
            return Err(DomainError::Validation("user ID cannot be empty".into()));
        }
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user {id}")))
    }

    /// Update an account's profile fields and emit `UserUpdated`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for empty input and
    /// `DomainError::NotFound` if the account does not exist. A publish
    /// failure does not fail the update.
    pub async fn update_user(
        &self,
        id: &str,
        username: &str,
        email: &str,
    ) -> Result<User, DomainError> {
        if id.is_empty() {
            return Err(DomainError::Validation("user ID cannot be empty".into()));
        }
        if username.is_empty() {
            return Err(DomainError::Validation("username cannot be empty".into()));
        }
        if email.is_empty() {
            return Err(DomainError::Validation("email cannot be empty".into()));
        }

        let mut user = self.get_user(id).await?;
        user.username = username.to_owned();
        user.email = email.to_owned();
        user.updated_at = Utc::now();
        self.repository.update(&user).await?;
        tracing::info!(user_id = %user.id, "user updated");

        let event = UserUpdated::new(&user.id, &user.username, &user.email);
        if let Err(err) = self.publisher.publish(&event.into()).await {
            tracing::warn!(user_id = %user.id, error = %err, "failed to publish user updated event");
        }

        Ok(user)
    }

    /// Remove an account and emit `UserDeleted`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for an empty id and
    /// `DomainError::NotFound` if the account does not exist. A publish
    /// failure does not fail the deletion.
    pub async fn delete_user(&self, id: &str) -> Result<(), DomainError> {
        if id.is_empty() {
            return Err(DomainError::Validation("user ID cannot be empty".into()));
        }

        // Fetch first so the event can carry the username.
        let user = self.get_user(id).await?;
        self.repository.delete(id).await?;
        tracing::info!(user_id = %user.id, "user deleted");

        let event = UserDeleted::new(&user.id, &user.username);
        if let Err(err) = self.publisher.publish(&event.into()).await {
            tracing::warn!(user_id = %user.id, error = %err, "failed to publish user deleted event");
        }

        Ok(())
    }

    /// All accounts.
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list().await
    }
}
