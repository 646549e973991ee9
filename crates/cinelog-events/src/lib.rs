//! Cinelog Events — the closed set of domain events carried on the bus.
//!
//! One module per domain, mirroring the producing services. Every event kind
//! has a topic-tag constant, a payload struct (the only part that travels on
//! the wire), a constructor that fills the envelope metadata, and a wire
//! decoder used by the registry on the consuming side.
//!
//! Decoded envelopes get fresh local metadata: the wire format carries only
//! the payload fields, and the type tag is carried out-of-band as the topic
//! name.

pub mod library;
pub mod movies;
pub mod rating;
pub mod user;
pub mod watchlist;

use cinelog_core::error::EventError;
use cinelog_core::event::{Event, EventMeta};

/// Every event kind the system publishes or consumes, one variant per topic.
#[derive(Debug, Clone)]
pub enum CinelogEvent {
    UserRegistered(user::UserRegistered),
    UserUpdated(user::UserUpdated),
    UserDeleted(user::UserDeleted),
    MovieCreated(movies::MovieCreated),
    MovieUpdated(movies::MovieUpdated),
    MovieDeleted(movies::MovieDeleted),
    MovieWatched(library::MovieWatched),
    MovieRated(rating::MovieRated),
    MovieUnrated(rating::MovieUnrated),
    MovieAddedToWatchlist(watchlist::MovieAddedToWatchlist),
}

impl Event for CinelogEvent {
    fn meta(&self) -> &EventMeta {
        match self {
            Self::UserRegistered(e) => &e.meta,
            Self::UserUpdated(e) => &e.meta,
            Self::UserDeleted(e) => &e.meta,
            Self::MovieCreated(e) => &e.meta,
            Self::MovieUpdated(e) => &e.meta,
            Self::MovieDeleted(e) => &e.meta,
            Self::MovieWatched(e) => &e.meta,
            Self::MovieRated(e) => &e.meta,
            Self::MovieUnrated(e) => &e.meta,
            Self::MovieAddedToWatchlist(e) => &e.meta,
        }
    }

    fn event_type(&self) -> &'static str {
        match self {
            Self::UserRegistered(_) => user::USER_REGISTERED,
            Self::UserUpdated(_) => user::USER_UPDATED,
            Self::UserDeleted(_) => user::USER_DELETED,
            Self::MovieCreated(_) => movies::MOVIE_CREATED,
            Self::MovieUpdated(_) => movies::MOVIE_UPDATED,
            Self::MovieDeleted(_) => movies::MOVIE_DELETED,
            Self::MovieWatched(_) => library::MOVIE_WATCHED,
            Self::MovieRated(_) => rating::MOVIE_RATED,
            Self::MovieUnrated(_) => rating::MOVIE_UNRATED,
            Self::MovieAddedToWatchlist(_) => watchlist::MOVIE_ADDED_TO_WATCHLIST,
        }
    }

    fn encode_payload(&self) -> Result<Vec<u8>, EventError> {
        let encoded = match self {
            Self::UserRegistered(e) => serde_json::to_vec(&e.payload),
            Self::UserUpdated(e) => serde_json::to_vec(&e.payload),
            Self::UserDeleted(e) => serde_json::to_vec(&e.payload),
            Self::MovieCreated(e) => serde_json::to_vec(&e.payload),
            Self::MovieUpdated(e) => serde_json::to_vec(&e.payload),
            Self::MovieDeleted(e) => serde_json::to_vec(&e.payload),
            Self::MovieWatched(e) => serde_json::to_vec(&e.payload),
            Self::MovieRated(e) => serde_json::to_vec(&e.payload),
            Self::MovieUnrated(e) => serde_json::to_vec(&e.payload),
            Self::MovieAddedToWatchlist(e) => serde_json::to_vec(&e.payload),
        };
        encoded.map_err(EventError::Encode)
    }
}

macro_rules! impl_from_event {
    ($($struct_ty:ty => $variant:ident),* $(,)?) => {
        $(impl From<$struct_ty> for CinelogEvent {
            fn from(event: $struct_ty) -> Self {
                Self::$variant(event)
            }
        })*
    };
}

impl_from_event! {
    user::UserRegistered => UserRegistered,
    user::UserUpdated => UserUpdated,
    user::UserDeleted => UserDeleted,
    movies::MovieCreated => MovieCreated,
    movies::MovieUpdated => MovieUpdated,
    movies::MovieDeleted => MovieDeleted,
    library::MovieWatched => MovieWatched,
    rating::MovieRated => MovieRated,
    rating::MovieUnrated => MovieUnrated,
    watchlist::MovieAddedToWatchlist => MovieAddedToWatchlist,
}
