//! Cinelog — watch history domain.
//!
//! Records what each user has watched and emits `library_movie_watched`.

pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub use handler::LibraryHandler;
pub use model::WatchRecord;
pub use repository::{InMemoryLibraryRepository, LibraryRepository};
pub use service::LibraryService;
