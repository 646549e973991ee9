//! Consumer-side handler for the watch history topic.

use async_trait::async_trait;
use cinelog_core::error::EventError;
use cinelog_core::event::Event;
use cinelog_core::handler::EventHandler;
use cinelog_events::CinelogEvent;
use cinelog_events::library::MOVIE_WATCHED;

/// Reacts to viewings. Stands in for the watchlist-removal and statistics
/// updates a full deployment would run here.
#[derive(Default)]
pub struct LibraryHandler;

impl LibraryHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventHandler<CinelogEvent> for LibraryHandler {
    async fn handle(&self, event: &CinelogEvent) -> Result<(), EventError> {
        match event {
            CinelogEvent::MovieWatched(e) => {
                tracing::info!(
                    user_id = %e.payload.user_id,
                    movie_id = %e.payload.movie_id,
                    title = %e.payload.title,
                    duration_minutes = e.payload.duration_minutes,
                    "updating viewing statistics"
                );
                Ok(())
            }
            other => Err(EventError::Handler(format!(
                "unexpected event type '{}'",
                other.event_type()
            ))),
        }
    }

    fn can_handle(&self, event_type: &str) -> bool {
        event_type == MOVIE_WATCHED
    }
}
