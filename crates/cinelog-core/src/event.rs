//! Event envelope abstractions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EventError;

/// Identity and timing carried by every event envelope.
///
/// The metadata is local to the producing (or consuming) process: only the
/// payload fields travel on the wire, and the type tag travels out-of-band as
/// the broker topic name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMeta {
    /// Unique event identifier, generated at construction, never reused.
    pub event_id: Uuid,
    /// Timestamp of event construction, set once.
    pub occurred_at: DateTime<Utc>,
}

impl EventMeta {
    /// Single factory for envelope metadata. Events are never hand-assembled
    /// with partial identity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for EventMeta {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait implemented by the closed set of event kinds.
///
/// `event_type` doubles as the broker topic name, so it uniquely determines
/// the payload schema on both sides of the wire.
pub trait Event: Clone + Send + Sync + std::fmt::Debug + 'static {
    /// Returns the envelope metadata.
    fn meta(&self) -> &EventMeta;

    /// Returns the type tag (also the broker topic this event is carried on).
    fn event_type(&self) -> &'static str;

    /// Serializes the payload fields — and only those — for the wire.
    ///
    /// # Errors
    ///
    /// Returns `EventError::Encode` if JSON serialization fails.
    fn encode_payload(&self) -> Result<Vec<u8>, EventError>;
}
