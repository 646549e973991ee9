//! Lifecycle controller for the consumption side.

use std::future::Future;
use std::sync::Arc;

use cinelog_core::event::Event;
use tokio::sync::watch;

use crate::broker::Broker;
use crate::consume::{TopicState, run_topic_loop};
use crate::error::BusError;
use crate::registry::EventRegistry;

/// Starts one consumption loop per registered topic, blocks until a shutdown
/// signal, then drains and closes every loop before returning.
pub struct ConsumerSupervisor<E: Event> {
    broker: Arc<dyn Broker>,
    registry: Arc<EventRegistry<E>>,
}

impl<E: Event> ConsumerSupervisor<E> {
    #[must_use]
    pub fn new(broker: Arc<dyn Broker>, registry: EventRegistry<E>) -> Self {
        Self {
            broker,
            registry: Arc::new(registry),
        }
    }

    /// Run until the process receives an interrupt (Ctrl-C / SIGTERM via the
    /// runtime's signal handling), then shut down gracefully.
    ///
    /// # Errors
    ///
    /// Returns `BusError::Broker` if any topic's consumer cannot be
    /// established at startup — the design favors "all topics consuming or
    /// none" over partial startup.
    pub async fn run_until_signal(self) -> Result<(), BusError> {
        self.run(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %err, "failed to listen for shutdown signal");
            }
        })
        .await
    }

    /// Run until `shutdown` completes. Does not return until every
    /// consumption loop has drained its in-flight dispatch and released its
    /// broker handle.
    ///
    /// # Errors
    ///
    /// Returns `BusError::Broker` if any topic's consumer cannot be
    /// established at startup. Steady-state per-message errors are only
    /// logged and never surface here.
    pub async fn run<F>(self, shutdown: F) -> Result<(), BusError>
    where
        F: Future<Output = ()> + Send,
    {
        // Connect every topic before starting any loop: a single connection
        // failure aborts the whole startup.
        let mut consumers = Vec::new();
        for topic in self.registry.topics() {
            tracing::debug!(topic, state = ?TopicState::Connecting, "opening topic consumer");
            let consumer = self.broker.subscribe(&topic).await?;
            consumers.push((topic, consumer));
        }

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let mut tasks = Vec::with_capacity(consumers.len());
        for (topic, consumer) in consumers {
            tracing::info!(topic, "consuming messages");
            tasks.push(tokio::spawn(run_topic_loop(
                topic,
                consumer,
                Arc::clone(&self.registry),
                shutdown_rx.clone(),
            )));
        }
        drop(shutdown_rx);

        shutdown.await;
        tracing::info!("shutdown requested; draining consumption loops");
        let _ = shutdown_tx.send(true);

        for task in tasks {
            if let Err(err) = task.await {
                tracing::error!(error = %err, "consumption task terminated abnormally");
            }
        }
        tracing::info!("all consumption loops closed");
        Ok(())
    }
}
