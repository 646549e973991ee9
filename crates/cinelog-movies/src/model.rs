//! Movie catalog documents.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One credited cast entry on a movie document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastMember {
    pub name: String,
    pub character: String,
}

/// A catalog document. Richer than the event payloads on purpose: only a
/// projection of these fields travels on the bus.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub genre: Vec<String>,
    pub director: Vec<String>,
    pub description: String,
    pub duration_minutes: Option<u32>,
    pub cast: Vec<CastMember>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields the caller supplies when adding a movie; identity and timestamps
/// are assigned by the service.
#[derive(Debug, Clone, Default)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub genre: Vec<String>,
    pub director: Vec<String>,
    pub description: String,
    pub duration_minutes: Option<u32>,
    pub cast: Vec<CastMember>,
}

impl Movie {
    #[must_use]
    pub fn from_new(new: NewMovie) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            year: new.year,
            genre: new.genre,
            director: new.director,
            description: new.description,
            duration_minutes: new.duration_minutes,
            cast: new.cast,
            created_at: now,
            updated_at: now,
        }
    }
}
