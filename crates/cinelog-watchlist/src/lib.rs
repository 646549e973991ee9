//! Cinelog — watchlist domain.
//!
//! Tracks what each user plans to watch and emits `watchlist.movie_added`.

pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub use handler::WatchlistHandler;
pub use model::WatchlistEntry;
pub use repository::{InMemoryWatchlistRepository, WatchlistRepository};
pub use service::WatchlistService;
