//! Cinelog — movie ratings domain.
//!
//! Owns per-user star ratings and emits the `rating.*` events.

pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub use handler::RatingHandler;
pub use model::Rating;
pub use repository::{InMemoryRatingRepository, RatingRepository};
pub use service::RatingService;
