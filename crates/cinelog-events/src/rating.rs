//! Rating events.

use cinelog_core::error::EventError;
use cinelog_core::event::EventMeta;
use serde::{Deserialize, Serialize};

use crate::CinelogEvent;

/// Topic tag for `MovieRated`.
pub const MOVIE_RATED: &str = "rating.movie_rated";
/// Topic tag for `MovieUnrated`.
pub const MOVIE_UNRATED: &str = "rating.movie_unrated";

/// Wire payload for `MovieRated`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRatedPayload {
    pub user_id: String,
    pub movie_id: String,
    pub title: String,
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
}

/// Emitted after a rating is written or revised.
#[derive(Debug, Clone)]
pub struct MovieRated {
    pub meta: EventMeta,
    pub payload: MovieRatedPayload,
}

impl MovieRated {
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        movie_id: impl Into<String>,
        title: impl Into<String>,
        rating: f64,
        review: Option<String>,
    ) -> Self {
        Self {
            meta: EventMeta::new(),
            payload: MovieRatedPayload {
                user_id: user_id.into(),
                movie_id: movie_id.into(),
                title: title.into(),
                rating,
                review,
            },
        }
    }
}

/// Wire payload for `MovieUnrated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieUnratedPayload {
    pub user_id: String,
    pub movie_id: String,
    pub title: String,
}

/// Emitted after a rating is removed.
#[derive(Debug, Clone)]
pub struct MovieUnrated {
    pub meta: EventMeta,
    pub payload: MovieUnratedPayload,
}

impl MovieUnrated {
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        movie_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            meta: EventMeta::new(),
            payload: MovieUnratedPayload {
                user_id: user_id.into(),
                movie_id: movie_id.into(),
                title: title.into(),
            },
        }
    }
}

/// Wire decoder for the `rating.movie_rated` topic.
///
/// # Errors
///
/// Returns `EventError::Decode` on malformed payloads.
pub fn decode_rated(bytes: &[u8]) -> Result<CinelogEvent, EventError> {
    let payload: MovieRatedPayload = serde_json::from_slice(bytes).map_err(EventError::Decode)?;
    Ok(CinelogEvent::MovieRated(MovieRated {
        meta: EventMeta::new(),
        payload,
    }))
}

/// Wire decoder for the `rating.movie_unrated` topic.
///
/// # Errors
///
/// Returns `EventError::Decode` on malformed payloads.
pub fn decode_unrated(bytes: &[u8]) -> Result<CinelogEvent, EventError> {
    let payload: MovieUnratedPayload =
        serde_json::from_slice(bytes).map_err(EventError::Decode)?;
    Ok(CinelogEvent::MovieUnrated(MovieUnrated {
        meta: EventMeta::new(),
        payload,
    }))
}
