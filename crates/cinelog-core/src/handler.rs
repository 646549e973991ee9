//! Event handler capability.

use async_trait::async_trait;

use crate::error::EventError;
use crate::event::Event;

/// A unit of side-effect logic subscribed to one or more event types.
///
/// Handlers are stateless with respect to the bus — anything they own is
/// injected at construction. `can_handle` must return true for every tag the
/// handler is registered under; the dispatch loop double-checks it before
/// invoking `handle`, so a handler registered defensively for a tag it
/// ignores is simply skipped.
///
/// Handlers must not publish the event they are currently handling — there is
/// no cycle prevention in the bus, only caller discipline.
#[async_trait]
pub trait EventHandler<E: Event>: Send + Sync {
    /// Process a single event.
    ///
    /// # Errors
    ///
    /// A returned error is logged by the consumption loop and does not stop
    /// delivery to later handlers or processing of later messages.
    async fn handle(&self, event: &E) -> Result<(), EventError>;

    /// Whether this handler claims the given type tag.
    fn can_handle(&self, event_type: &str) -> bool;
}
