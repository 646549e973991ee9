//! Library (watch history) events.

use chrono::{DateTime, Utc};
use cinelog_core::error::EventError;
use cinelog_core::event::EventMeta;
use serde::{Deserialize, Serialize};

use crate::CinelogEvent;

/// Topic tag for `MovieWatched`.
pub const MOVIE_WATCHED: &str = "library_movie_watched";

/// Wire payload for `MovieWatched`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieWatchedPayload {
    pub user_id: String,
    pub movie_id: String,
    pub title: String,
    pub watched_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

/// Emitted after a watch record is appended to a user's library.
#[derive(Debug, Clone)]
pub struct MovieWatched {
    pub meta: EventMeta,
    pub payload: MovieWatchedPayload,
}

impl MovieWatched {
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        movie_id: impl Into<String>,
        title: impl Into<String>,
        watched_at: DateTime<Utc>,
        duration_minutes: Option<u32>,
    ) -> Self {
        Self {
            meta: EventMeta::new(),
            payload: MovieWatchedPayload {
                user_id: user_id.into(),
                movie_id: movie_id.into(),
                title: title.into(),
                watched_at,
                duration_minutes,
            },
        }
    }
}

/// Wire decoder for the `library_movie_watched` topic.
///
/// # Errors
///
/// Returns `EventError::Decode` on malformed payloads.
pub fn decode_watched(bytes: &[u8]) -> Result<CinelogEvent, EventError> {
    let payload: MovieWatchedPayload =
        serde_json::from_slice(bytes).map_err(EventError::Decode)?;
    Ok(CinelogEvent::MovieWatched(MovieWatched {
        meta: EventMeta::new(),
        payload,
    }))
}
