//! Cinelog entry point.

use std::error::Error;
use std::sync::Arc;

use cinelog_bus::{Broker, ConsumerSupervisor, EventPublisher, InMemoryBroker};
use tracing_subscriber::EnvFilter;

use cinelog_app::{AppConfig, build_registry, build_services, demo};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env();

    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .json()
        .init();

    tracing::info!(environment = %config.environment, "starting cinelog");

    let broker = InMemoryBroker::new();
    let publisher = EventPublisher::new(broker.producer());
    let services = build_services(&publisher);
    let registry = build_registry();

    if config.run_demo {
        demo::run(&services).await?;
    }

    // Consumers subscribe from the oldest offset, so everything the demo
    // published is delivered once the loops start.
    let supervisor = ConsumerSupervisor::new(Arc::new(broker), registry);
    supervisor.run_until_signal().await?;

    tracing::info!("cinelog stopped");
    Ok(())
}
