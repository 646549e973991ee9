//! Event type and handler registry.
//!
//! Registrations are added during process initialization and never mutated
//! afterward: the builder is consumed into an immutable [`EventRegistry`]
//! that every consumption loop reads concurrently without locking.

use std::collections::HashMap;
use std::sync::Arc;

use cinelog_core::error::EventError;
use cinelog_core::event::Event;
use cinelog_core::handler::EventHandler;

/// Wire decoder for one event kind: reconstructs the typed envelope from the
/// raw payload bytes of its topic.
pub type DecodeFn<E> = fn(&[u8]) -> Result<E, EventError>;

/// What the registry holds for one type tag: the decoder and the ordered
/// handlers subscribed to it.
pub struct Registration<E: Event> {
    decode: DecodeFn<E>,
    handlers: Vec<Arc<dyn EventHandler<E>>>,
}

impl<E: Event> Registration<E> {
    /// Decode a raw payload into the concrete event for this tag.
    ///
    /// # Errors
    ///
    /// Returns `EventError::Decode` if the payload does not match the schema.
    pub fn decode(&self, payload: &[u8]) -> Result<E, EventError> {
        (self.decode)(payload)
    }

    /// Handlers in registration order.
    #[must_use]
    pub fn handlers(&self) -> &[Arc<dyn EventHandler<E>>] {
        &self.handlers
    }
}

/// Builder used during process initialization. Registration order of handlers
/// per tag is the dispatch order.
pub struct RegistryBuilder<E: Event> {
    entries: HashMap<String, Registration<E>>,
}

impl<E: Event> RegistryBuilder<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register an event type under its tag with its first handler. The last
    /// registration for a tag wins; re-registering a tag is a bug in caller
    /// code, not guarded against, since registration only happens at init.
    pub fn register(
        &mut self,
        event_type: &str,
        decode: DecodeFn<E>,
        handler: Arc<dyn EventHandler<E>>,
    ) -> &mut Self {
        self.entries.insert(
            event_type.to_owned(),
            Registration {
                decode,
                handlers: vec![handler],
            },
        );
        self
    }

    /// Append an additional handler to an already registered tag.
    pub fn subscribe(&mut self, event_type: &str, handler: Arc<dyn EventHandler<E>>) -> &mut Self {
        if let Some(registration) = self.entries.get_mut(event_type) {
            registration.handlers.push(handler);
        } else {
            tracing::warn!(
                event_type,
                "subscribe before register; handler not attached"
            );
        }
        self
    }

    /// Freeze the registrations into the immutable registry.
    #[must_use]
    pub fn build(self) -> EventRegistry<E> {
        EventRegistry {
            entries: self.entries,
        }
    }
}

impl<E: Event> Default for RegistryBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable-after-init mapping from type tag to decoder and handler set.
/// Shared read-only across all consumption loops.
pub struct EventRegistry<E: Event> {
    entries: HashMap<String, Registration<E>>,
}

impl<E: Event> EventRegistry<E> {
    /// Look up the registration for a tag. `None` is a recoverable
    /// per-message condition on the consuming side, not an error.
    #[must_use]
    pub fn lookup(&self, event_type: &str) -> Option<&Registration<E>> {
        self.entries.get(event_type)
    }

    /// All registered topics, sorted for deterministic startup order.
    #[must_use]
    pub fn topics(&self) -> Vec<String> {
        let mut topics: Vec<String> = self.entries.keys().cloned().collect();
        topics.sort();
        topics
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cinelog_core::event::EventMeta;
    use cinelog_test_support::RecordingHandler;

    use super::*;

    #[derive(Debug, Clone)]
    struct Marker(EventMeta);

    impl Event for Marker {
        fn meta(&self) -> &EventMeta {
            &self.0
        }

        fn event_type(&self) -> &'static str {
            "test.marker"
        }

        fn encode_payload(&self) -> Result<Vec<u8>, EventError> {
            Ok(b"{}".to_vec())
        }
    }

    fn decode_marker(_bytes: &[u8]) -> Result<Marker, EventError> {
        Ok(Marker(EventMeta::new()))
    }

    #[test]
    fn lookup_missing_tag_returns_none() {
        let registry = RegistryBuilder::<Marker>::new().build();
        assert!(registry.lookup("test.marker").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn last_registration_for_a_tag_wins() {
        let first = Arc::new(RecordingHandler::new(&["test.marker"]));
        let second = Arc::new(RecordingHandler::new(&["test.marker"]));

        let mut builder = RegistryBuilder::new();
        builder.register("test.marker", decode_marker, first);
        builder.register("test.marker", decode_marker, second);
        let registry = builder.build();

        let registration = registry.lookup("test.marker").unwrap();
        assert_eq!(registration.handlers().len(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn subscribe_appends_in_order() {
        let first = Arc::new(RecordingHandler::new(&["test.marker"]));
        let second = Arc::new(RecordingHandler::new(&["test.marker"]));

        let mut builder = RegistryBuilder::new();
        builder.register("test.marker", decode_marker, first);
        builder.subscribe("test.marker", second);
        let registry = builder.build();

        assert_eq!(registry.lookup("test.marker").unwrap().handlers().len(), 2);
    }

    #[test]
    fn subscribe_without_register_is_ignored() {
        let handler = Arc::new(RecordingHandler::new(&["test.marker"]));
        let mut builder = RegistryBuilder::<Marker>::new();
        builder.subscribe("test.marker", handler);
        let registry = builder.build();
        assert!(registry.lookup("test.marker").is_none());
    }

    #[test]
    fn topics_are_sorted() {
        let handler = Arc::new(RecordingHandler::new(&["b.topic", "a.topic"]));
        let mut builder = RegistryBuilder::new();
        builder.register("b.topic", decode_marker, handler.clone());
        builder.register("a.topic", decode_marker, handler);
        let registry = builder.build();
        assert_eq!(registry.topics(), vec!["a.topic", "b.topic"]);
    }
}
