//! Shared error types.

use thiserror::Error;

/// Errors raised while encoding, decoding, or handling events.
#[derive(Debug, Error)]
pub enum EventError {
    /// Payload serialization failed on the publish path.
    #[error("payload encoding failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// Payload deserialization failed on the consume path.
    #[error("payload decoding failed: {0}")]
    Decode(#[source] serde_json::Error),

    /// A message arrived on a topic with no registered event type.
    #[error("no event type registered for topic '{0}'")]
    Unregistered(String),

    /// A handler reported a processing failure. Logged by the consumption
    /// loop; never propagated back to the publisher.
    #[error("handler failed: {0}")]
    Handler(String),
}

/// Errors raised by domain services and their collaborators.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A validation rule rejected the input before any write happened.
    #[error("validation error: {0}")]
    Validation(String),

    /// The requested entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A uniqueness constraint was violated.
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// A collaborator (persistence, catalog store) failed.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),

    /// Publishing the domain event failed after a successful write.
    #[error("publish failed: {0}")]
    Publish(String),
}
