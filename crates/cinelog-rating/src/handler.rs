//! Consumer-side handler for the `rating.*` topics.

use async_trait::async_trait;
use cinelog_core::error::EventError;
use cinelog_core::event::Event;
use cinelog_core::handler::EventHandler;
use cinelog_events::CinelogEvent;
use cinelog_events::rating::{MOVIE_RATED, MOVIE_UNRATED};

/// Reacts to rating changes. Stands in for aggregate-score recomputation in
/// a full deployment.
#[derive(Default)]
pub struct RatingHandler;

impl RatingHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventHandler<CinelogEvent> for RatingHandler {
    async fn handle(&self, event: &CinelogEvent) -> Result<(), EventError> {
        match event {
            CinelogEvent::MovieRated(e) => {
                tracing::info!(
                    user_id = %e.payload.user_id,
                    movie_id = %e.payload.movie_id,
                    rating = e.payload.rating,
                    "recomputing average rating"
                );
            }
            CinelogEvent::MovieUnrated(e) => {
                tracing::info!(
                    user_id = %e.payload.user_id,
                    movie_id = %e.payload.movie_id,
                    "recomputing average after rating removal"
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
        matches!(event_type, MOVIE_RATED | MOVIE_UNRATED)
    }
}
