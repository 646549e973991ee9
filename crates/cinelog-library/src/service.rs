//! Watch history application service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use cinelog_bus::EventPublisher;
use cinelog_core::error::DomainError;
use cinelog_events::CinelogEvent;
use cinelog_events::library::MovieWatched;

use crate::model::WatchRecord;
use crate::repository::LibraryRepository;

/// Orchestrates watch history writes. Unlike the user and movie services,
/// a publish failure here fails the operation: downstream consumers are the
/// point of recording a watch.
pub struct LibraryService {
    repository: Arc<dyn LibraryRepository>,
    publisher: EventPublisher<CinelogEvent>,
}

impl LibraryService {
    #[must_use]
    pub fn new(
        repository: Arc<dyn LibraryRepository>,
        publisher: EventPublisher<CinelogEvent>,
    ) -> Self {
        Self {
            repository,
            publisher,
        }
    }

    /// Record a viewing and emit `MovieWatched`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for empty input, repository errors
    /// as-is, and `DomainError::Publish` if the event cannot be published.
    pub async fn mark_watched(
        &self,
        user_id: &str,
        movie_id: &str,
        title: &str,
        watched_at: DateTime<Utc>,
        duration_minutes: Option<u32>,
    ) -> Result<(), DomainError> {
        if user_id.is_empty() {
            return Err(DomainError::Validation("user ID cannot be empty".into()));
        }
        if movie_id.is_empty() {
            return Err(DomainError::Validation("movie ID cannot be empty".into()));
        }
        if title.is_empty() {
            return Err(DomainError::Validation("movie title cannot be empty".into()));
        }

        let record = WatchRecord {
            user_id: user_id.to_owned(),
            movie_id: movie_id.to_owned(),
            title: title.to_owned(),
            watched_at,
            duration_minutes,
        };
        self.repository.record(&record).await?;
        tracing::info!(user_id, movie_id, title, "watch recorded");

        let event = MovieWatched::new(user_id, movie_id, title, watched_at, duration_minutes);
        self.publisher
            .publish(&event.into())
            .await
            .map_err(|err| DomainError::Publish(err.to_string()))
    }

    /// A user's viewings, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for an empty user id.
    pub async fn watch_history(&self, user_id: &str) -> Result<Vec<WatchRecord>, DomainError> {
        if user_id.is_empty() {
            return Err(DomainError::Validation("user ID cannot be empty".into()));
        }
        self.repository.history(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use cinelog_bus::{Broker, InMemoryBroker};
    use cinelog_events::library::MOVIE_WATCHED;

    use super::*;
    use crate::repository::InMemoryLibraryRepository;

    fn service_with_broker() -> (LibraryService, InMemoryBroker, Arc<InMemoryLibraryRepository>) {
        let broker = InMemoryBroker::new();
        let repository = Arc::new(InMemoryLibraryRepository::new());
        let service = LibraryService::new(
            Arc::clone(&repository) as Arc<dyn LibraryRepository>,
            EventPublisher::new(broker.producer()),
        );
        (service, broker, repository)
    }

    #[tokio::test]
    async fn mark_watched_records_then_publishes() {
        let (service, broker, repository) = service_with_broker();

        service
            .mark_watched("u1", "m1", "Heat", Utc::now(), Some(170))
            .await
            .unwrap();

        assert_eq!(repository.watch_count("u1", "m1").await.unwrap(), 1);
        assert_eq!(broker.message_count(MOVIE_WATCHED), 1);
    }

    #[tokio::test]
    async fn mark_watched_rejects_empty_title() {
        let (service, broker, _repository) = service_with_broker();

        let err = service
            .mark_watched("u1", "m1", "", Utc::now(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(broker.message_count(MOVIE_WATCHED), 0);
    }

    #[tokio::test]
    async fn history_returns_recorded_viewings() {
        let (service, _broker, _repository) = service_with_broker();
        service
            .mark_watched("u1", "m1", "Heat", Utc::now(), None)
            .await
            .unwrap();

        let history = service.watch_history("u1").await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].title, "Heat");
    }
}
