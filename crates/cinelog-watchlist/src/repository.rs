//! Watchlist storage boundary.

use std::sync::Mutex;

use async_trait::async_trait;
use cinelog_core::error::DomainError;

use crate::model::WatchlistEntry;

/// Storage collaborator for watchlists.
#[async_trait]
pub trait WatchlistRepository: Send + Sync {
    /// Add an entry. Adding the same movie twice for a user is idempotent.
    async fn add(&self, entry: &WatchlistEntry) -> Result<(), DomainError>;

    /// Remove an entry.
    async fn remove(&self, user_id: &str, movie_id: &str) -> Result<(), DomainError>;

    /// A user's watchlist, in insertion order.
    async fn for_user(&self, user_id: &str) -> Result<Vec<WatchlistEntry>, DomainError>;

    /// Whether a user's watchlist contains a movie.
    async fn contains(&self, user_id: &str, movie_id: &str) -> Result<bool, DomainError>;
}

/// Process-local watchlist store.
#[derive(Default)]
pub struct InMemoryWatchlistRepository {
    entries: Mutex<Vec<WatchlistEntry>>,
}

impl InMemoryWatchlistRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<WatchlistEntry>>, DomainError> {
        self.entries
            .lock()
            .map_err(|_| DomainError::Infrastructure("watchlist store poisoned".into()))
    }
}

#[async_trait]
impl WatchlistRepository for InMemoryWatchlistRepository {
    async fn add(&self, entry: &WatchlistEntry) -> Result<(), DomainError> {
        let mut entries = self.lock()?;
        let already_listed = entries
            .iter()
            .any(|e| e.user_id == entry.user_id && e.movie_id == entry.movie_id);
        if !already_listed {
            entries.push(entry.clone());
        }
        Ok(())
    }

    async fn remove(&self, user_id: &str, movie_id: &str) -> Result<(), DomainError> {
        let mut entries = self.lock()?;
        let before = entries.len();
        entries.retain(|e| !(e.user_id == user_id && e.movie_id == movie_id));
        if entries.len() == before {
            return Err(DomainError::NotFound(format!(
                "watchlist entry {movie_id} for {user_id}"
            )));
        }
        Ok(())
    }

    async fn for_user(&self, user_id: &str) -> Result<Vec<WatchlistEntry>, DomainError> {
        Ok(self
            .lock()?
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn contains(&self, user_id: &str, movie_id: &str) -> Result<bool, DomainError> {
        Ok(self
            .lock()?
            .iter()
            .any(|e| e.user_id == user_id && e.movie_id == movie_id))
    }
}
