//! Shared test mocks and utilities for Cinelog.

mod handler;

pub use handler::{FailingHandler, RecordingHandler};
