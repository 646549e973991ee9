//! Watch history storage boundary.

use std::sync::Mutex;

use async_trait::async_trait;
use cinelog_core::error::DomainError;

use crate::model::WatchRecord;

/// Storage collaborator for watch history.
#[async_trait]
pub trait LibraryRepository: Send + Sync {
    /// Append one viewing.
    async fn record(&self, record: &WatchRecord) -> Result<(), DomainError>;

    /// A user's viewings, oldest first.
    async fn history(&self, user_id: &str) -> Result<Vec<WatchRecord>, DomainError>;

    /// How many times a user has watched a given movie.
    async fn watch_count(&self, user_id: &str, movie_id: &str) -> Result<usize, DomainError>;
}

/// Process-local watch history.
#[derive(Default)]
pub struct InMemoryLibraryRepository {
    records: Mutex<Vec<WatchRecord>>,
}

impl InMemoryLibraryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<WatchRecord>>, DomainError> {
        self.records
            .lock()
            .map_err(|_| DomainError::Infrastructure("watch history poisoned".into()))
    }
}

#[async_trait]
impl LibraryRepository for InMemoryLibraryRepository {
    async fn record(&self, record: &WatchRecord) -> Result<(), DomainError> {
        self.lock()?.push(record.clone());
        Ok(())
    }

    async fn history(&self, user_id: &str) -> Result<Vec<WatchRecord>, DomainError> {
        Ok(self
            .lock()?
            .iter()
            .filter(|record| record.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn watch_count(&self, user_id: &str, movie_id: &str) -> Result<usize, DomainError> {
        Ok(self
            .lock()?
            .iter()
            .filter(|record| record.user_id == user_id && record.movie_id == movie_id)
            .count())
    }
}
