//! Broker protocol boundary.
//!
//! One topic per event type tag; no topic carries more than one schema. The
//! bus holds a single long-lived broker connection per process, acquired at
//! startup and released at shutdown — producers and consumers are handles
//! onto that connection.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::BrokerError;

/// Where the broker durably appended a published message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    pub partition: i32,
    pub offset: u64,
}

/// A raw message pulled from a topic, before decoding.
#[derive(Debug, Clone)]
pub struct RawMessage {
    pub topic: String,
    pub payload: Vec<u8>,
    pub partition: i32,
    pub offset: u64,
}

/// Publish-side handle. Shared by all publishing callers; implementations
/// must serialize concurrent sends if their transport requires it.
#[async_trait]
pub trait BrokerProducer: Send + Sync {
    /// Durably append `payload` to `topic`, blocking until the broker
    /// acknowledges persistence.
    ///
    /// # Errors
    ///
    /// Returns `BrokerError::Publish` if the broker rejects or loses the
    /// append, `BrokerError::Connection` if the transport is down.
    async fn send(&self, topic: &str, payload: Vec<u8>) -> Result<Receipt, BrokerError>;
}

/// Consume-side handle, owned exclusively by one topic's consumption loop.
#[async_trait]
pub trait BrokerConsumer: Send {
    /// Await the next message in the topic's stored order.
    ///
    /// # Errors
    ///
    /// Transport-level failures surface as `BrokerError::Receive`; the
    /// consumption loop logs them and continues.
    async fn next(&mut self) -> Result<RawMessage, BrokerError>;
}

/// A connected broker. Subscriptions always start from the oldest retained
/// offset — there is no committed-offset tracking across restarts, so every
/// process start replays the topic's full retained history.
#[async_trait]
pub trait Broker: Send + Sync {
    /// Returns the shared publish-side handle.
    fn producer(&self) -> Arc<dyn BrokerProducer>;

    /// Open a consumer bound to `topic`, positioned at the oldest offset.
    ///
    /// # Errors
    ///
    /// Returns `BrokerError::Connection` if the subscription cannot be
    /// established.
    async fn subscribe(&self, topic: &str) -> Result<Box<dyn BrokerConsumer>, BrokerError>;
}
