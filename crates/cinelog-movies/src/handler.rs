//! Consumer-side handler for the `movies_*` topics.

use async_trait::async_trait;
use cinelog_core::error::EventError;
use cinelog_core::event::Event;
use cinelog_core::handler::EventHandler;
use cinelog_events::CinelogEvent;
use cinelog_events::movies::{MOVIE_CREATED, MOVIE_DELETED, MOVIE_UPDATED};

/// Reacts to catalog events. Stands in for search-index maintenance in a
/// full deployment.
#[derive(Default)]
pub struct MovieHandler;

impl MovieHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventHandler<CinelogEvent> for MovieHandler {
    async fn handle(&self, event: &CinelogEvent) -> Result<(), EventError> {
        match event {
            CinelogEvent::MovieCreated(e) => {
                tracing::info!(
                    movie_id = %e.payload.movie_id,
                    title = %e.payload.title,
                    year = e.payload.year,
                    "indexing new movie"
                );
            }
            CinelogEvent::MovieUpdated(e) => {
                tracing::info!(
                    movie_id = %e.payload.movie_id,
                    title = %e.payload.title,
                    "reindexing updated movie"
                );
            }
            CinelogEvent::MovieDeleted(e) => {
                tracing::info!(
                    movie_id = %e.payload.movie_id,
                    title = %e.payload.title,
                    "removing movie from index"
                );
            }
            other => {
                return Err(EventError::Handler(format!(
                    "unexpected event type '{}'",
                    other.event_type()
                )));
            }
        }
        Ok(())
    }

    fn can_handle(&self, event_type: &str) -> bool {
        matches!(event_type, MOVIE_CREATED | MOVIE_UPDATED | MOVIE_DELETED)
    }
}

#[cfg(test)]
mod tests {
    use cinelog_events::movies::MovieCreated;

    use super::*;

    #[tokio::test]
    async fn claims_only_movie_topics() {
        let handler = MovieHandler::new();
        assert!(handler.can_handle(MOVIE_CREATED));
        assert!(handler.can_handle(MOVIE_UPDATED));
        assert!(handler.can_handle(MOVIE_DELETED));
        assert!(!handler.can_handle("user.user_registered"));
    }

    #[tokio::test]
    async fn handles_created_event() {
        let handler = MovieHandler::new();
        let event: CinelogEvent = MovieCreated::new(
            "m1",
            "Inception",
            2010,
            vec!["Sci-Fi".to_owned()],
            vec!["Christopher Nolan".to_owned()],
            "A thief enters dreams.",
        )
        .into();
        handler.handle(&event).await.unwrap();
    }
}
