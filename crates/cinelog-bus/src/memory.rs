//! In-memory log broker.
//!
//! Single-partition append-only log per topic, retained for the life of the
//! process. Consumers start at offset zero, which models the
//! replay-from-oldest subscription semantics of the durable broker this
//! stands in for. Used by the application binary and by tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::broker::{Broker, BrokerConsumer, BrokerProducer, RawMessage, Receipt};
use crate::error::BrokerError;

#[derive(Default)]
struct Shared {
    topics: Mutex<HashMap<String, Vec<Vec<u8>>>>,
    arrival: Notify,
}

/// Thread-safe in-memory broker. Cloning yields another handle onto the same
/// topic logs.
#[derive(Clone, Default)]
pub struct InMemoryBroker {
    shared: Arc<Shared>,
}

impl InMemoryBroker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of messages retained on `topic`.
    ///
    /// # Panics
    ///
    /// Panics if the topic lock is poisoned.
    #[must_use]
    pub fn message_count(&self, topic: &str) -> usize {
        self.shared
            .topics
            .lock()
            .unwrap()
            .get(topic)
            .map_or(0, Vec::len)
    }

    /// Snapshot of the raw payloads retained on `topic`, in stored order.
    ///
    /// # Panics
    ///
    /// Panics if the topic lock is poisoned.
    #[must_use]
    pub fn payloads(&self, topic: &str) -> Vec<Vec<u8>> {
        self.shared
            .topics
            .lock()
            .unwrap()
            .get(topic)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl BrokerProducer for InMemoryBroker {
    async fn send(&self, topic: &str, payload: Vec<u8>) -> Result<Receipt, BrokerError> {
        let offset = {
            let mut topics = self
                .shared
                .topics
                .lock()
                .map_err(|_| BrokerError::Publish("topic log poisoned".into()))?;
            let log = topics.entry(topic.to_owned()).or_default();
            log.push(payload);
            (log.len() - 1) as u64
        };
        self.shared.arrival.notify_waiters();
        Ok(Receipt {
            partition: 0,
            offset,
        })
    }
}

#[async_trait]
impl Broker for InMemoryBroker {
    fn producer(&self) -> Arc<dyn BrokerProducer> {
        Arc::new(self.clone())
    }

    async fn subscribe(&self, topic: &str) -> Result<Box<dyn BrokerConsumer>, BrokerError> {
        // Subscribing creates the topic so a consumer can be waiting before
        // the first publish.
        self.shared
            .topics
            .lock()
            .map_err(|_| BrokerError::Connection("topic log poisoned".into()))?
            .entry(topic.to_owned())
            .or_default();

        Ok(Box::new(InMemoryConsumer {
            shared: Arc::clone(&self.shared),
            topic: topic.to_owned(),
            position: 0,
        }))
    }
}

struct InMemoryConsumer {
    shared: Arc<Shared>,
    topic: String,
    position: usize,
}

impl InMemoryConsumer {
    fn try_take(&mut self) -> Option<RawMessage> {
        let topics = self.shared.topics.lock().unwrap();
        let log = topics.get(&self.topic)?;
        if self.position >= log.len() {
            return None;
        }
        let message = RawMessage {
            topic: self.topic.clone(),
            payload: log[self.position].clone(),
            partition: 0,
            offset: self.position as u64,
        };
        self.position += 1;
        Some(message)
    }
}

#[async_trait]
impl BrokerConsumer for InMemoryConsumer {
    async fn next(&mut self) -> Result<RawMessage, BrokerError> {
        loop {
            // Register for wakeup before checking, so an append between the
            // check and the await is not missed.
            let shared = Arc::clone(&self.shared);
            let arrival = shared.arrival.notified();
            if let Some(message) = self.try_take() {
                return Ok(message);
            }
            arrival.await;
        }
    }
}
