//! Cinelog — movie catalog domain.
//!
//! Owns the movie documents and emits the `movies_*` events after each
//! catalog write.

pub mod catalog;
pub mod handler;
pub mod model;
pub mod service;

pub use catalog::{InMemoryMovieCatalog, MovieCatalog};
pub use handler::MovieHandler;
pub use model::{CastMember, Movie, NewMovie};
pub use service::MovieService;
