//! Movie catalog events.

use cinelog_core::error::EventError;
use cinelog_core::event::EventMeta;
use serde::{Deserialize, Serialize};

use crate::CinelogEvent;

/// Topic tag for `MovieCreated`.
pub const MOVIE_CREATED: &str = "movies_movie_created";
/// Topic tag for `MovieUpdated`.
pub const MOVIE_UPDATED: &str = "movies_movie_updated";
/// Topic tag for `MovieDeleted`.
pub const MOVIE_DELETED: &str = "movies_movie_deleted";

/// Wire payload for `MovieCreated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieCreatedPayload {
    pub movie_id: String,
    pub title: String,
    pub year: i32,
    pub genre: Vec<String>,
    pub director: Vec<String>,
    pub description: String,
}

/// Emitted after a movie document is added to the catalog.
#[derive(Debug, Clone)]
pub struct MovieCreated {
    pub meta: EventMeta,
    pub payload: MovieCreatedPayload,
}

impl MovieCreated {
    #[must_use]
    pub fn new(
        movie_id: impl Into<String>,
        title: impl Into<String>,
        year: i32,
        genre: Vec<String>,
        director: Vec<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            meta: EventMeta::new(),
            payload: MovieCreatedPayload {
                movie_id: movie_id.into(),
                title: title.into(),
                year,
                genre,
                director,
                description: description.into(),
            },
        }
    }
}

/// Wire payload for `MovieUpdated` and `MovieDeleted`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRefPayload {
    pub movie_id: String,
    pub title: String,
}

/// Emitted after a catalog document update.
#[derive(Debug, Clone)]
pub struct MovieUpdated {
    pub meta: EventMeta,
    pub payload: MovieRefPayload,
}

impl MovieUpdated {
    #[must_use]
    pub fn new(movie_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            meta: EventMeta::new(),
            payload: MovieRefPayload {
                movie_id: movie_id.into(),
                title: title.into(),
            },
        }
    }
}

/// Emitted after a catalog document removal.
#[derive(Debug, Clone)]
pub struct MovieDeleted {
    pub meta: EventMeta,
    pub payload: MovieRefPayload,
}

impl MovieDeleted {
    #[must_use]
    pub fn new(movie_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            meta: EventMeta::new(),
            payload: MovieRefPayload {
                movie_id: movie_id.into(),
                title: title.into(),
            },
        }
    }
}

/// Wire decoder for the `movies_movie_created` topic.
///
/// # Errors
///
/// Returns `EventError::Decode` on malformed payloads.
pub fn decode_created(bytes: &[u8]) -> Result<CinelogEvent, EventError> {
    let payload: MovieCreatedPayload =
        serde_json::from_slice(bytes).map_err(EventError::Decode)?;
    Ok(CinelogEvent::MovieCreated(MovieCreated {
        meta: EventMeta::new(),
        payload,
    }))
}

/// Wire decoder for the `movies_movie_updated` topic.
///
/// # Errors
///
/// Returns `EventError::Decode` on malformed payloads.
pub fn decode_updated(bytes: &[u8]) -> Result<CinelogEvent, EventError> {
    let payload: MovieRefPayload = serde_json::from_slice(bytes).map_err(EventError::Decode)?;
    Ok(CinelogEvent::MovieUpdated(MovieUpdated {
        meta: EventMeta::new(),
        payload,
    }))
}

/// Wire decoder for the `movies_movie_deleted` topic.
///
/// # Errors
///
/// Returns `EventError::Decode` on malformed payloads.
pub fn decode_deleted(bytes: &[u8]) -> Result<CinelogEvent, EventError> {
    let payload: MovieRefPayload = serde_json::from_slice(bytes).map_err(EventError::Decode)?;
    Ok(CinelogEvent::MovieDeleted(MovieDeleted {
        meta: EventMeta::new(),
        payload,
    }))
}
