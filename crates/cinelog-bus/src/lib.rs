//! Cinelog Bus — the in-process event bus core.
//!
//! The bus routes domain events from producing services to independent
//! consuming handlers without either side knowing about the other:
//!
//! - [`registry`] — immutable-after-init mapping from a type tag to its wire
//!   decoder and the ordered handlers subscribed to it.
//! - [`publish`] — encodes an event's payload and hands it to the broker
//!   under a topic equal to the event's type tag, blocking until the broker
//!   acknowledges the append.
//! - [`consume`] — the per-topic consumption loop: read, decode, dispatch to
//!   every handler that claims the tag, surviving per-message failures.
//! - [`supervisor`] — the lifecycle controller: connects every topic (all or
//!   none), runs one loop per topic, and drains them all on shutdown.
//! - [`broker`] / [`memory`] — the protocol boundary to the durable broker,
//!   and the process-local log implementation of it.
//!
//! Delivery is at-least-once: consumers always replay from the oldest
//! retained offset, so handlers are expected to be idempotent or purely
//! observational.

pub mod broker;
pub mod consume;
pub mod error;
pub mod memory;
pub mod publish;
pub mod registry;
pub mod supervisor;

pub use broker::{Broker, BrokerConsumer, BrokerProducer, RawMessage, Receipt};
pub use error::{BrokerError, BusError};
pub use memory::InMemoryBroker;
pub use publish::EventPublisher;
pub use registry::{DecodeFn, EventRegistry, Registration, RegistryBuilder};
pub use supervisor::ConsumerSupervisor;
