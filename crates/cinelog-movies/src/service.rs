//! Movie catalog application service.

use std::sync::Arc;

use chrono::Utc;
use cinelog_bus::EventPublisher;
use cinelog_core::error::DomainError;
use cinelog_events::CinelogEvent;
use cinelog_events::movies::{MovieCreated, MovieDeleted, MovieUpdated};

use crate::catalog::MovieCatalog;
use crate::model::{Movie, NewMovie};

/// Orchestrates catalog writes. As with user accounts, a publish failure
/// after a successful write is logged and the operation still succeeds.
pub struct MovieService {
    catalog: Arc<dyn MovieCatalog>,
    publisher: EventPublisher<CinelogEvent>,
}

impl MovieService {
    #[must_use]
    pub fn new(catalog: Arc<dyn MovieCatalog>, publisher: EventPublisher<CinelogEvent>) -> Self {
        Self { catalog, publisher }
    }

    /// Add a movie to the catalog and emit `MovieCreated`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for an empty title or an
    /// out-of-range year, and catalog errors as-is.
    pub async fn create_movie(&self, new: NewMovie) -> Result<Movie, DomainError> {
        if new.title.is_empty() {
            return Err(DomainError::Validation("movie title cannot be empty".into()));
        }
        // First publicly shown film predates nothing in this catalog.
        if new.year < 1888 {
            return Err(DomainError::Validation(format!(
                "movie year {} is before motion pictures existed",
                new.year
            )));
        }

        let movie = Movie::from_new(new);
        self.catalog.create(&movie).await?;
        tracing::info!(movie_id = %movie.id, title = %movie.title, "movie created");

        let event = MovieCreated::new(
            &movie.id,
            &movie.title,
            movie.year,
            movie.genre.clone(),
            movie.director.clone(),
            &movie.description,
        );
        if let Err(err) = self.publisher.publish(&event.into()).await {
            tracing::warn!(movie_id = %movie.id, error = %err, "failed to publish movie created event");
        }

        Ok(movie)
    }

    /// Fetch a document by identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if no such document exists.
    pub async fn get_movie(&self, id: &str) -> Result<Movie, DomainError> {
        if id.is_empty() {
            return Err(DomainError::Validation("movie ID cannot be empty".into()));
        }
        self.catalog
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("movie {id}")))
    }

    /// Overwrite a document and emit `MovieUpdated`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for empty input and
    /// `DomainError::NotFound` if the document does not exist.
    pub async fn update_movie(&self, mut movie: Movie) -> Result<Movie, DomainError> {
        if movie.id.is_empty() {
            return Err(DomainError::Validation("movie ID cannot be empty".into()));
        }
        if movie.title.is_empty() {
            return Err(DomainError::Validation("movie title cannot be empty".into()));
        }

        movie.updated_at = Utc::now();
        self.catalog.update(&movie).await?;
        tracing::info!(movie_id = %movie.id, "movie updated");

        let event = MovieUpdated::new(&movie.id, &movie.title);
        if let Err(err) = self.publisher.publish(&event.into()).await {
            tracing::warn!(movie_id = %movie.id, error = %err, "failed to publish movie updated event");
        }

        Ok(movie)
    }

    /// Remove a document and emit `MovieDeleted`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the document does not exist.
    pub async fn delete_movie(&self, id: &str) -> Result<(), DomainError> {
        // Fetch first so the event can carry the title.
        let movie = self.get_movie(id).await?;
        self.catalog.delete(id).await?;
        tracing::info!(movie_id = %movie.id, "movie deleted");

        let event = MovieDeleted::new(&movie.id, &movie.title);
        if let Err(err) = self.publisher.publish(&event.into()).await {
            tracing::warn!(movie_id = %movie.id, error = %err, "failed to publish movie deleted event");
        }

        Ok(())
    }

    /// Documents whose genre list contains `genre`.
    ///
    /// # Errors
    ///
    /// Propagates catalog errors.
    pub async fn movies_by_genre(&self, genre: &str) -> Result<Vec<Movie>, DomainError> {
        if genre.is_empty() {
            return Err(DomainError::Validation("genre cannot be empty".into()));
        }
        self.catalog.get_by_genre(genre).await
    }

    /// All documents.
    ///
    /// # Errors
    ///
    /// Propagates catalog errors.
    pub async fn list_movies(&self) -> Result<Vec<Movie>, DomainError> {
        self.catalog.list().await
    }
}

#[cfg(test)]
mod tests {
    use cinelog_bus::{Broker, InMemoryBroker};
    use cinelog_events::movies::{MOVIE_CREATED, MOVIE_DELETED};

    use super::*;
    use crate::catalog::InMemoryMovieCatalog;

    fn service_with_broker() -> (MovieService, InMemoryBroker) {
        let broker = InMemoryBroker::new();
        let service = MovieService::new(
            Arc::new(InMemoryMovieCatalog::new()),
            EventPublisher::new(broker.producer()),
        );
        (service, broker)
    }

    fn inception() -> NewMovie {
        NewMovie {
            title: "Inception".to_owned(),
            year: 2010,
            genre: vec!["Sci-Fi".to_owned()],
            director: vec!["Christopher Nolan".to_owned()],
            description: "A thief enters dreams.".to_owned(),
            ..NewMovie::default()
        }
    }

    #[tokio::test]
    async fn create_persists_then_publishes() {
        let (service, broker) = service_with_broker();

        let movie = service.create_movie(inception()).await.unwrap();
        assert_eq!(service.get_movie(&movie.id).await.unwrap().title, "Inception");
        assert_eq!(broker.message_count(MOVIE_CREATED), 1);
    }

    #[tokio::test]
    async fn create_rejects_implausible_year() {
        let (service, broker) = service_with_broker();

        let err = service
            .create_movie(NewMovie {
                year: 1600,
                ..inception()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(broker.message_count(MOVIE_CREATED), 0);
    }

    #[tokio::test]
    async fn delete_event_carries_title() {
        let (service, broker) = service_with_broker();
        let movie = service.create_movie(inception()).await.unwrap();

        service.delete_movie(&movie.id).await.unwrap();

        let payloads = broker.payloads(MOVIE_DELETED);
        assert_eq!(payloads.len(), 1);
        assert!(String::from_utf8(payloads[0].clone()).unwrap().contains("Inception"));
    }

    #[tokio::test]
    async fn delete_missing_movie_is_not_found() {
        let (service, _broker) = service_with_broker();
        let err = service.delete_movie("missing").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
