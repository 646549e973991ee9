//! Rating application service.

use std::sync::Arc;

use chrono::Utc;
use cinelog_bus::EventPublisher;
use cinelog_core::error::DomainError;
use cinelog_events::CinelogEvent;
use cinelog_events::rating::{MovieRated, MovieUnrated};

use crate::model::{MAX_RATING, MIN_RATING, Rating};
use crate::repository::RatingRepository;

/// Orchestrates rating writes. A publish failure fails the operation.
pub struct RatingService {
    repository: Arc<dyn RatingRepository>,
    publisher: EventPublisher<CinelogEvent>,
}

impl RatingService {
    #[must_use]
    pub fn new(
        repository: Arc<dyn RatingRepository>,
        publisher: EventPublisher<CinelogEvent>,
    ) -> Self {
        Self {
            repository,
            publisher,
        }
    }

    /// Rate a movie (or revise an existing rating) and emit `MovieRated`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for empty input or a rating outside
    /// 0.0–5.0, repository errors as-is, and `DomainError::Publish` if the
    /// event cannot be published.
    pub async fn rate_movie(
        &self,
        user_id: &str,
        movie_id: &str,
        title: &str,
        rating: f64,
        review: Option<String>,
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
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(DomainError::Validation(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING}, got {rating:.1}"
            )));
        }

        let entry = Rating {
            user_id: user_id.to_owned(),
            movie_id: movie_id.to_owned(),
            title: title.to_owned(),
            rating,
            review: review.clone(),
            rated_at: Utc::now(),
        };
        self.repository.upsert(&entry).await?;
        tracing::info!(user_id, movie_id, rating, "movie rated");

        let event = MovieRated::new(user_id, movie_id, title, rating, review);
        self.publisher
            .publish(&event.into())
            .await
            .map_err(|err| DomainError::Publish(err.to_string()))
    }

    /// Remove a rating and emit `MovieUnrated`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for empty input,
    /// `DomainError::NotFound` if no rating exists, and
    /// `DomainError::Publish` if the event cannot be published.
    pub async fn remove_rating(
        &self,
        user_id: &str,
        movie_id: &str,
        title: &str,
    ) -> Result<(), DomainError> {
        if user_id.is_empty() {
            return Err(DomainError::Validation("user ID cannot be empty".into()));
        }
        if movie_id.is_empty() {
            return Err(DomainError::Validation("movie ID cannot be empty".into()));
        }

        self.repository.remove(user_id, movie_id).await?;
        tracing::info!(user_id, movie_id, "rating removed");

        let event = MovieUnrated::new(user_id, movie_id, title);
        self.publisher
            .publish(&event.into())
            .await
            .map_err(|err| DomainError::Publish(err.to_string()))
    }

    /// All ratings of one movie.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for an empty movie id.
    pub async fn movie_ratings(&self, movie_id: &str) -> Result<Vec<Rating>, DomainError> {
        if movie_id.is_empty() {
            return Err(DomainError::Validation("movie ID cannot be empty".into()));
        }
        self.repository.for_movie(movie_id).await
    }
}

#[cfg(test)]
mod tests {
    use cinelog_bus::{Broker, InMemoryBroker};
    use cinelog_events::rating::{MOVIE_RATED, MOVIE_UNRATED};

    use super::*;
    use crate::repository::InMemoryRatingRepository;

    fn service_with_broker() -> (RatingService, InMemoryBroker) {
        let broker = InMemoryBroker::new();
        let service = RatingService::new(
            Arc::new(InMemoryRatingRepository::new()),
            EventPublisher::new(broker.producer()),
        );
        (service, broker)
    }

    #[tokio::test]
    async fn rate_persists_then_publishes() {
        let (service, broker) = service_with_broker();

        service
            .rate_movie("u1", "m1", "Heat", 4.5, Some("tense".into()))
            .await
            .unwrap();

        assert_eq!(service.movie_ratings("m1").await.unwrap().len(), 1);
        assert_eq!(broker.message_count(MOVIE_RATED), 1);
    }

    #[tokio::test]
    async fn rating_bounds_are_inclusive() {
        let (service, broker) = service_with_broker();

        service.rate_movie("u1", "m1", "Heat", 0.0, None).await.unwrap();
        service.rate_movie("u1", "m2", "Ronin", 5.0, None).await.unwrap();

        let err = service
            .rate_movie("u1", "m3", "Thief", 5.1, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = service
            .rate_movie("u1", "m3", "Thief", -0.1, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        assert_eq!(broker.message_count(MOVIE_RATED), 2);
    }

    #[tokio::test]
    async fn remove_requires_existing_rating() {
        let (service, broker) = service_with_broker();

        let err = service.remove_rating("u1", "m1", "Heat").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
        assert_eq!(broker.message_count(MOVIE_UNRATED), 0);

        service.rate_movie("u1", "m1", "Heat", 4.0, None).await.unwrap();
        service.remove_rating("u1", "m1", "Heat").await.unwrap();
        assert_eq!(broker.message_count(MOVIE_UNRATED), 1);
    }
}
