//! Test handlers — mock `EventHandler` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use cinelog_core::error::EventError;
use cinelog_core::event::Event;
use cinelog_core::handler::EventHandler;

/// A handler that records every event it receives and always succeeds.
/// Claims exactly the tags it was constructed with.
pub struct RecordingHandler<E> {
    accepts: Vec<String>,
    seen: Mutex<Vec<E>>,
}

impl<E: Event> RecordingHandler<E> {
    /// Create a recording handler claiming the given type tags.
    #[must_use]
    pub fn new(accepts: &[&str]) -> Self {
        Self {
            accepts: accepts.iter().map(|tag| (*tag).to_owned()).collect(),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the events received so far, in delivery order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn seen(&self) -> Vec<E> {
        self.seen.lock().unwrap().clone()
    }

    /// Number of events received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn seen_count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

#[async_trait]
impl<E: Event> EventHandler<E> for RecordingHandler<E> {
    async fn handle(&self, event: &E) -> Result<(), EventError> {
        self.seen.lock().unwrap().push(event.clone());
        Ok(())
    }

    fn can_handle(&self, event_type: &str) -> bool {
        self.accepts.iter().any(|tag| tag == event_type)
    }
}

/// A handler that claims the given tags but fails every delivery. Counts the
/// attempts so tests can assert delivery still happened.
pub struct FailingHandler {
    accepts: Vec<String>,
    attempts: Mutex<usize>,
}

impl FailingHandler {
    /// Create a failing handler claiming the given type tags.
    #[must_use]
    pub fn new(accepts: &[&str]) -> Self {
        Self {
            accepts: accepts.iter().map(|tag| (*tag).to_owned()).collect(),
            attempts: Mutex::new(0),
        }
    }

    /// Number of deliveries attempted against this handler.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl<E: Event> EventHandler<E> for FailingHandler {
    async fn handle(&self, _event: &E) -> Result<(), EventError> {
        *self.attempts.lock().unwrap() += 1;
        Err(EventError::Handler("simulated handler failure".into()))
    }

    fn can_handle(&self, event_type: &str) -> bool {
        self.accepts.iter().any(|tag| tag == event_type)
    }
}
