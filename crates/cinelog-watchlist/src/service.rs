//! Watchlist application service.

use std::sync::Arc;

use chrono::Utc;
use cinelog_bus::EventPublisher;
use cinelog_core::error::DomainError;
use cinelog_events::CinelogEvent;
use cinelog_events::watchlist::MovieAddedToWatchlist;
use cinelog_movies::Movie;

use crate::model::WatchlistEntry;
use crate::repository::WatchlistRepository;

/// Orchestrates watchlist writes. A publish failure fails the operation.
pub struct WatchlistService {
    repository: Arc<dyn WatchlistRepository>,
    publisher: EventPublisher<CinelogEvent>,
}

impl WatchlistService {
    #[must_use]
    pub fn new(
        repository: Arc<dyn WatchlistRepository>,
        publisher: EventPublisher<CinelogEvent>,
    ) -> Self {
        Self {
            repository,
            publisher,
        }
    }

    /// Put a movie on a user's watchlist and emit `MovieAddedToWatchlist`.
    /// The event's genre field flattens the movie's genre list.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for an empty user id, repository
    /// errors as-is, and `DomainError::Publish` if the event cannot be
    /// published.
    pub async fn add_movie(&self, user_id: &str, movie: &Movie) -> Result<(), DomainError> {
        if user_id.is_empty() {
            return Err(DomainError::Validation("user ID cannot be empty".into()));
        }

        let entry = WatchlistEntry {
            user_id: user_id.to_owned(),
            movie_id: movie.id.clone(),
            title: movie.title.clone(),
            added_at: Utc::now(),
        };
        self.repository.add(&entry).await?;
        tracing::info!(user_id, movie_id = %movie.id, title = %movie.title, "movie added to watchlist");

        let event = MovieAddedToWatchlist::new(
            user_id,
            &movie.id,
            &movie.title,
            movie.genre.join(", "),
            movie.year,
        );
        self.publisher
            .publish(&event.into())
            .await
            .map_err(|err| DomainError::Publish(err.to_string()))
    }

    /// Take a movie off a user's watchlist.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for empty input and
    /// `DomainError::NotFound` if the entry does not exist.
    pub async fn remove_movie(&self, user_id: &str, movie_id: &str) -> Result<(), DomainError> {
        if user_id.is_empty() {
            return Err(DomainError::Validation("user ID cannot be empty".into()));
        }
        if movie_id.is_empty() {
            return Err(DomainError::Validation("movie ID cannot be empty".into()));
        }

        self.repository.remove(user_id, movie_id).await?;
        tracing::info!(user_id, movie_id, "movie removed from watchlist");
        Ok(())
    }

    /// A user's watchlist, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for an empty user id.
    pub async fn watchlist(&self, user_id: &str) -> Result<Vec<WatchlistEntry>, DomainError> {
        if user_id.is_empty() {
            return Err(DomainError::Validation("user ID cannot be empty".into()));
        }
        self.repository.for_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use cinelog_bus::{Broker, InMemoryBroker};
    use cinelog_events::watchlist::MOVIE_ADDED_TO_WATCHLIST;
    use cinelog_movies::NewMovie;

    use super::*;
    use crate::repository::InMemoryWatchlistRepository;

    fn service_with_broker() -> (WatchlistService, InMemoryBroker) {
        let broker = InMemoryBroker::new();
        let service = WatchlistService::new(
            Arc::new(InMemoryWatchlistRepository::new()),
            EventPublisher::new(broker.producer()),
        );
        (service, broker)
    }

    fn inception() -> Movie {
        Movie::from_new(NewMovie {
            title: "Inception".to_owned(),
            year: 2010,
            genre: vec!["Sci-Fi".to_owned(), "Thriller".to_owned()],
            director: vec!["Christopher Nolan".to_owned()],
            ..NewMovie::default()
        })
    }

    #[tokio::test]
    async fn add_persists_then_publishes_flattened_genre() {
        let (service, broker) = service_with_broker();
        let movie = inception();

        service.add_movie("u1", &movie).await.unwrap();

        assert_eq!(service.watchlist("u1").await.unwrap().len(), 1);
        let payloads = broker.payloads(MOVIE_ADDED_TO_WATCHLIST);
        assert_eq!(payloads.len(), 1);
        let text = String::from_utf8(payloads[0].clone()).unwrap();
        assert!(text.contains("Sci-Fi, Thriller"));
    }

    #[tokio::test]
    async fn add_rejects_empty_user() {
        let (service, broker) = service_with_broker();

        let err = service.add_movie("", &inception()).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(broker.message_count(MOVIE_ADDED_TO_WATCHLIST), 0);
    }

    #[tokio::test]
    async fn remove_clears_the_entry() {
        let (service, _broker) = service_with_broker();
        let movie = inception();
        service.add_movie("u1", &movie).await.unwrap();

        service.remove_movie("u1", &movie.id).await.unwrap();
        assert!(service.watchlist("u1").await.unwrap().is_empty());
    }
}
