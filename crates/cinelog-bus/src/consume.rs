//! The per-topic consumption loop.
//!
//! Each registered topic gets one independent long-running task. Loops share
//! the read-only registry and nothing else: no cross-topic coordination, no
//! backpressure between loops. Per-topic delivery order is the broker's
//! stored order; no ordering holds across topics.

use std::sync::Arc;

use cinelog_core::event::Event;
use tokio::sync::watch;

use crate::broker::BrokerConsumer;
use crate::registry::EventRegistry;

/// Lifecycle of one topic's loop. `Connecting` happens in the supervisor,
/// before the loop task is spawned, so that a connection failure can abort
/// the whole startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicState {
    Connecting,
    Consuming,
    Draining,
    Closed,
}

/// Run one topic's consumption loop until the shutdown signal flips.
///
/// Every per-message failure — unknown topic, decode error, handler error,
/// broker receive error — is logged and the loop advances. Only the shutdown
/// signal ends it: in-flight dispatch finishes, then the consumer handle is
/// released.
pub(crate) async fn run_topic_loop<E: Event>(
    topic: String,
    mut consumer: Box<dyn BrokerConsumer>,
    registry: Arc<EventRegistry<E>>,
    mut shutdown: watch::Receiver<bool>,
) {
    tracing::debug!(topic, state = ?TopicState::Consuming, "consumption loop started");

    loop {
        tokio::select! {
            _ = shutdown.changed() => {
                tracing::debug!(topic, state = ?TopicState::Draining, "shutdown signal received");
                break;
            }
            received = consumer.next() => match received {
                Ok(message) => {
                    dispatch(&topic, message.offset, &message.payload, &registry).await;
                }
                Err(err) => {
                    tracing::error!(topic, error = %err, "broker error while consuming");
                }
            },
        }
    }

    drop(consumer);
    tracing::info!(topic, state = ?TopicState::Closed, "consumption loop closed");
}

/// Decode one raw message and invoke every handler that claims its tag,
/// synchronously, in registration order.
pub(crate) async fn dispatch<E: Event>(
    topic: &str,
    offset: u64,
    payload: &[u8],
    registry: &EventRegistry<E>,
) {
    let Some(registration) = registry.lookup(topic) else {
        tracing::warn!(topic, offset, "no event type registered for topic; skipping message");
        return;
    };

    let event = match registration.decode(payload) {
        Ok(event) => event,
        Err(err) => {
            tracing::warn!(topic, offset, error = %err, "failed to decode message; skipping");
            return;
        }
    };

    for handler in registration.handlers() {
        if !handler.can_handle(topic) {
            continue;
        }
        if let Err(err) = handler.handle(&event).await {
            // Terminal outcome for this delivery: no retry, no dead-letter.
            tracing::error!(
                topic,
                offset,
                event_id = %event.meta().event_id,
                error = %err,
                "handler failed; continuing with next handler"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cinelog_core::error::EventError;
    use cinelog_core::event::{Event, EventMeta};
    use cinelog_test_support::{FailingHandler, RecordingHandler};
    use serde::{Deserialize, Serialize};

    use super::dispatch;
    use crate::registry::RegistryBuilder;

    const PING: &str = "test.ping";

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    struct PingPayload {
        seq: u32,
    }

    #[derive(Debug, Clone)]
    struct PingEvent {
        meta: EventMeta,
        payload: PingPayload,
    }

    impl Event for PingEvent {
        fn meta(&self) -> &EventMeta {
            &self.meta
        }

        fn event_type(&self) -> &'static str {
            PING
        }

        fn encode_payload(&self) -> Result<Vec<u8>, EventError> {
            serde_json::to_vec(&self.payload).map_err(EventError::Encode)
        }
    }

    fn decode_ping(bytes: &[u8]) -> Result<PingEvent, EventError> {
        let payload: PingPayload = serde_json::from_slice(bytes).map_err(EventError::Decode)?;
        Ok(PingEvent {
            meta: EventMeta::new(),
            payload,
        })
    }

    #[tokio::test]
    async fn unknown_topic_is_skipped_without_panicking() {
        let handler = Arc::new(RecordingHandler::new(&[PING]));
        let mut builder = RegistryBuilder::new();
        builder.register(PING, decode_ping, handler.clone());
        let registry = builder.build();

        // A message on a topic with no registry entry is logged and dropped.
        dispatch("test.unknown", 0, br#"{"seq":1}"#, &registry).await;
        assert_eq!(handler.seen_count(), 0);

        // The registry still serves the known topic afterwards.
        dispatch(PING, 0, br#"{"seq":2}"#, &registry).await;
        assert_eq!(handler.seen_count(), 1);
    }

    #[tokio::test]
    async fn malformed_payload_is_skipped() {
        let handler = Arc::new(RecordingHandler::new(&[PING]));
        let mut builder = RegistryBuilder::new();
        builder.register(PING, decode_ping, handler.clone());
        let registry = builder.build();

        dispatch(PING, 0, b"not json", &registry).await;
        assert_eq!(handler.seen_count(), 0);

        dispatch(PING, 1, br#"{"seq":3}"#, &registry).await;
        assert_eq!(handler.seen_count(), 1);
        assert_eq!(handler.seen()[0].payload.seq, 3);
    }

    #[tokio::test]
    async fn handler_error_does_not_stop_later_handlers() {
        let failing = Arc::new(FailingHandler::new(&[PING]));
        let recording = Arc::new(RecordingHandler::new(&[PING]));
        let mut builder = RegistryBuilder::new();
        builder.register(PING, decode_ping, failing.clone());
        builder.subscribe(PING, recording.clone());
        let registry = builder.build();

        dispatch(PING, 0, br#"{"seq":1}"#, &registry).await;

        assert_eq!(failing.attempts(), 1);
        assert_eq!(recording.seen_count(), 1);
    }

    #[tokio::test]
    async fn handlers_that_do_not_claim_the_tag_are_skipped() {
        let claiming = Arc::new(RecordingHandler::new(&[PING]));
        let declining = Arc::new(RecordingHandler::new(&["test.other"]));
        let mut builder = RegistryBuilder::new();
        builder.register(PING, decode_ping, declining.clone());
        builder.subscribe(PING, claiming.clone());
        let registry = builder.build();

        dispatch(PING, 0, br#"{"seq":1}"#, &registry).await;

        assert_eq!(declining.seen_count(), 0);
        assert_eq!(claiming.seen_count(), 1);
    }
}
