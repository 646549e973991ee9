//! The publish path.

use std::marker::PhantomData;
use std::sync::Arc;

use cinelog_core::event::Event;

use crate::broker::BrokerProducer;
use crate::error::BusError;

/// Serializes event payloads and hands them to the broker under a topic equal
/// to the event's type tag.
///
/// Publishing is synchronous on the caller's task and blocks until the broker
/// acknowledges the append. There is no internal retry or buffering: a failed
/// publish is returned to the caller, who decides whether to retry, fail the
/// enclosing operation, or ignore. The publisher never touches the handler
/// registry — publish and consume are fully decoupled even within one
/// process.
pub struct EventPublisher<E: Event> {
    producer: Arc<dyn BrokerProducer>,
    _marker: PhantomData<fn(E)>,
}

impl<E: Event> Clone for EventPublisher<E> {
    fn clone(&self) -> Self {
        Self {
            producer: Arc::clone(&self.producer),
            _marker: PhantomData,
        }
    }
}

impl<E: Event> EventPublisher<E> {
    #[must_use]
    pub fn new(producer: Arc<dyn BrokerProducer>) -> Self {
        Self {
            producer,
            _marker: PhantomData,
        }
    }

    /// Encode and durably publish one event.
    ///
    /// # Errors
    ///
    /// Returns `BusError::Event` if payload serialization fails and
    /// `BusError::Broker` if the broker does not acknowledge the append. The
    /// event is not retried internally in either case.
    pub async fn publish(&self, event: &E) -> Result<(), BusError> {
        let topic = event.event_type();
        tracing::info!(
            topic,
            event_id = %event.meta().event_id,
            "publishing event"
        );

        let payload = event.encode_payload()?;
        let receipt = self.producer.send(topic, payload).await?;

        tracing::debug!(
            topic,
            partition = receipt.partition,
            offset = receipt.offset,
            "broker acknowledged publish"
        );
        Ok(())
    }
}
