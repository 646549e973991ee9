//! Cross-domain notification handler.

use async_trait::async_trait;
use cinelog_core::error::EventError;
use cinelog_core::event::Event;
use cinelog_core::handler::EventHandler;
use cinelog_events::CinelogEvent;
use cinelog_events::library::MOVIE_WATCHED;
use cinelog_events::rating::{MOVIE_RATED, MOVIE_UNRATED};
use cinelog_events::watchlist::MOVIE_ADDED_TO_WATCHLIST;

/// Subscribes alongside the owning domain's handler on the activity topics
/// and logs a user-facing notification for each. Demonstrates that one topic
/// fans out to every handler claiming its tag.
#[derive(Default)]
pub struct NotificationHandler;

impl NotificationHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventHandler<CinelogEvent> for NotificationHandler {
    async fn handle(&self, event: &CinelogEvent) -> Result<(), EventError> {
        match event {
            CinelogEvent::MovieAddedToWatchlist(e) => {
                tracing::info!(
                    user_id = %e.payload.user_id,
                    title = %e.payload.title,
                    "notification: movie saved for later"
                );
            }
            CinelogEvent::MovieWatched(e) => {
                tracing::info!(
                    user_id = %e.payload.user_id,
                    title = %e.payload.title,
                    "notification: enjoyed the movie? rate it"
                );
            }
            CinelogEvent::MovieRated(e) => {
                tracing::info!(
                    user_id = %e.payload.user_id,
                    title = %e.payload.title,
                    rating = e.payload.rating,
                    "notification: thanks for rating"
                );
            }
            CinelogEvent::MovieUnrated(e) => {
                tracing::info!(
                    user_id = %e.payload.user_id,
                    title = %e.payload.title,
                    "notification: rating removed"
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
        matches!(
            event_type,
            MOVIE_ADDED_TO_WATCHLIST | MOVIE_WATCHED | MOVIE_RATED | MOVIE_UNRATED
        )
    }
}
