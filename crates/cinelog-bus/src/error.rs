//! Bus error types.

use cinelog_core::error::EventError;
use thiserror::Error;

/// Errors surfaced by a broker implementation.
#[derive(Debug, Error)]
pub enum BrokerError {
    /// Establishing a producer or consumer connection failed. Fatal when it
    /// happens during supervisor startup.
    #[error("broker connection failed: {0}")]
    Connection(String),

    /// The broker did not acknowledge an append.
    #[error("broker rejected publish: {0}")]
    Publish(String),

    /// Receiving the next message failed. The consumption loop logs this and
    /// keeps going.
    #[error("broker receive failed: {0}")]
    Receive(String),
}

/// Top-level bus error: either the broker or the envelope contract failed.
#[derive(Debug, Error)]
pub enum BusError {
    #[error(transparent)]
    Broker(#[from] BrokerError),

    #[error(transparent)]
    Event(#[from] EventError),
}
