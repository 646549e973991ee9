//! Rating storage boundary.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use cinelog_core::error::DomainError;

use crate::model::Rating;

/// Storage collaborator for ratings, keyed by `(user_id, movie_id)`.
#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Insert or replace a user's rating of a movie.
    async fn upsert(&self, rating: &Rating) -> Result<(), DomainError>;

    /// Remove a user's rating of a movie.
    async fn remove(&self, user_id: &str, movie_id: &str) -> Result<(), DomainError>;

    /// Fetch a user's rating of a movie.
    async fn get(&self, user_id: &str, movie_id: &str) -> Result<Option<Rating>, DomainError>;

    /// All ratings of one movie, across users.
    async fn for_movie(&self, movie_id: &str) -> Result<Vec<Rating>, DomainError>;
}

/// Process-local rating store.
#[derive(Default)]
pub struct InMemoryRatingRepository {
    ratings: Mutex<HashMap<(String, String), Rating>>,
}

impl InMemoryRatingRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<(String, String), Rating>>, DomainError> {
        self.ratings
            .lock()
            .map_err(|_| DomainError::Infrastructure("rating store poisoned".into()))
    }
}

#[async_trait]
impl RatingRepository for InMemoryRatingRepository {
    async fn upsert(&self, rating: &Rating) -> Result<(), DomainError> {
        self.lock()?.insert(
            (rating.user_id.clone(), rating.movie_id.clone()),
            rating.clone(),
        );
        Ok(())
    }

    async fn remove(&self, user_id: &str, movie_id: &str) -> Result<(), DomainError> {
        self.lock()?
            .remove(&(user_id.to_owned(), movie_id.to_owned()))
            .map(|_| ())
            .ok_or_else(|| {
                DomainError::NotFound(format!("rating of {movie_id} by {user_id}"))
            })
    }

    async fn get(&self, user_id: &str, movie_id: &str) -> Result<Option<Rating>, DomainError> {
        Ok(self
            .lock()?
            .get(&(user_id.to_owned(), movie_id.to_owned()))
            .cloned())
    }

    async fn for_movie(&self, movie_id: &str) -> Result<Vec<Rating>, DomainError> {
        Ok(self
            .lock()?
            .values()
            .filter(|rating| rating.movie_id == movie_id)
            .cloned()
            .collect())
    }
}
