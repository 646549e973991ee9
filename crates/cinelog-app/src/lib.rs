//! Cinelog application wiring.
//!
//! Everything the binary does — configuration, registry construction,
//! service construction, the demo seed flow — lives here so integration
//! tests can drive the same wiring without spawning the process.

pub mod bootstrap;
pub mod config;
pub mod demo;
pub mod notifications;

pub use bootstrap::{Services, build_registry, build_services};
pub use config::AppConfig;
pub use notifications::NotificationHandler;
