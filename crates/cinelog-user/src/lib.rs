//! Cinelog — user accounts domain.
//!
//! Owns user registration, profile updates, and removal, and emits the
//! `user.*` events after each successful write.

pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub use handler::UserHandler;
pub use model::User;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
