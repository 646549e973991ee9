//! Catalog storage boundary.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use cinelog_core::error::DomainError;

use crate::model::Movie;

/// Document-store collaborator for movie documents.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Persist a new document.
    async fn create(&self, movie: &Movie) -> Result<(), DomainError>;

    /// Fetch by identifier.
    async fn get_by_id(&self, id: &str) -> Result<Option<Movie>, DomainError>;

    /// Overwrite an existing document.
    async fn update(&self, movie: &Movie) -> Result<(), DomainError>;

    /// Remove a document.
    async fn delete(&self, id: &str) -> Result<(), DomainError>;

    /// Documents whose genre list contains `genre`.
    async fn get_by_genre(&self, genre: &str) -> Result<Vec<Movie>, DomainError>;

    /// All documents, unordered.
    async fn list(&self) -> Result<Vec<Movie>, DomainError>;
}

/// Process-local movie store.
#[derive(Default)]
pub struct InMemoryMovieCatalog {
    movies: Mutex<HashMap<String, Movie>>,
}

impl InMemoryMovieCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Movie>>, DomainError> {
        self.movies
            .lock()
            .map_err(|_| DomainError::Infrastructure("movie store poisoned".into()))
    }
}

#[async_trait]
impl MovieCatalog for InMemoryMovieCatalog {
    async fn create(&self, movie: &Movie) -> Result<(), DomainError> {
        self.lock()?.insert(movie.id.clone(), movie.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Movie>, DomainError> {
        Ok(self.lock()?.get(id).cloned())
    }

    async fn update(&self, movie: &Movie) -> Result<(), DomainError> {
        let mut movies = self.lock()?;
        if !movies.contains_key(&movie.id) {
            return Err(DomainError::NotFound(format!("movie {}", movie.id)));
        }
        movies.insert(movie.id.clone(), movie.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.lock()?
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("movie {id}")))
    }

    async fn get_by_genre(&self, genre: &str) -> Result<Vec<Movie>, DomainError> {
        Ok(self
            .lock()?
            .values()
            .filter(|movie| movie.genre.iter().any(|g| g == genre))
            .cloned()
            .collect())
    }

    async fn list(&self) -> Result<Vec<Movie>, DomainError> {
        Ok(self.lock()?.values().cloned().collect())
    }
}
