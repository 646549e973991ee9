//! Consumer-side handler for the watchlist topic.

use async_trait::async_trait;
use cinelog_core::error::EventError;
use cinelog_core::event::Event;
use cinelog_core::handler::EventHandler;
use cinelog_events::CinelogEvent;
use cinelog_events::watchlist::MOVIE_ADDED_TO_WATCHLIST;

/// Reacts to watchlist additions. Stands in for recommendation updates in a
/// full deployment.
#[derive(Default)]
pub struct WatchlistHandler;

impl WatchlistHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventHandler<CinelogEvent> for WatchlistHandler {
    async fn handle(&self, event: &CinelogEvent) -> Result<(), EventError> {
        match event {
            CinelogEvent::MovieAddedToWatchlist(e) => {
                tracing::info!(
                    user_id = %e.payload.user_id,
                    movie_id = %e.payload.movie_id,
                    title = %e.payload.title,
                    genre = %e.payload.genre,
                    year = e.payload.year,
                    "refreshing recommendations"
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
        event_type == MOVIE_ADDED_TO_WATCHLIST
    }
}

#[cfg(test)]
mod tests {
    use cinelog_events::watchlist::MovieAddedToWatchlist;

    use super::*;

    #[tokio::test]
    async fn claims_only_the_watchlist_topic() {
        let handler = WatchlistHandler::new();
        assert!(handler.can_handle(MOVIE_ADDED_TO_WATCHLIST));
        assert!(!handler.can_handle("movies_movie_created"));
    }

    #[tokio::test]
    async fn handles_added_event() {
        let handler = WatchlistHandler::new();
        let event: CinelogEvent =
            MovieAddedToWatchlist::new("u1", "m1", "Inception", "Sci-Fi", 2010).into();
        handler.handle(&event).await.unwrap();
    }
}
