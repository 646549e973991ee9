//! Watchlist events.

use cinelog_core::error::EventError;
use cinelog_core::event::EventMeta;
use serde::{Deserialize, Serialize};

use crate::CinelogEvent;

/// Topic tag for `MovieAddedToWatchlist`.
pub const MOVIE_ADDED_TO_WATCHLIST: &str = "watchlist.movie_added";

/// Wire payload for `MovieAddedToWatchlist`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieAddedToWatchlistPayload {
    pub user_id: String,
    pub movie_id: String,
    pub title: String,
    pub genre: String,
    pub year: i32,
}

/// Emitted after a movie is added to a user's watchlist.
#[derive(Debug, Clone)]
pub struct MovieAddedToWatchlist {
    pub meta: EventMeta,
    pub payload: MovieAddedToWatchlistPayload,
}

impl MovieAddedToWatchlist {
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        movie_id: impl Into<String>,
        title: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            meta: EventMeta::new(),
            payload: MovieAddedToWatchlistPayload {
                user_id: user_id.into(),
                movie_id: movie_id.into(),
                title: title.into(),
                genre: genre.into(),
                year,
            },
        }
    }
}

/// Wire decoder for the `watchlist.movie_added` topic.
///
/// # Errors
///
/// Returns `EventError::Decode` on malformed payloads.
pub fn decode_added(bytes: &[u8]) -> Result<CinelogEvent, EventError> {
    let payload: MovieAddedToWatchlistPayload =
        serde_json::from_slice(bytes).map_err(EventError::Decode)?;
    Ok(CinelogEvent::MovieAddedToWatchlist(MovieAddedToWatchlist {
        meta: EventMeta::new(),
        payload,
    }))
}
