//! # Gateways Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Build the gateway registry with every in-tree family
//! - Create the dispatch service
//! - Start the HTTP server

mod config;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gateways_hex::{DispatchService, inbound::HttpServer};
use gateways_providers::{GatewayRegistry, TracingAuditSink};
use gateways_types::{AuditSink, GatewayFactory};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,gateways_app=debug,gateways_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting gateway dispatch server on port {}", config.port);

    // Build the registry (audit entries go to the tracing subscriber)
    let sink: Arc<dyn AuditSink> = Arc::new(TracingAuditSink::new());
    let registry = GatewayRegistry::with_defaults(sink);
    tracing::info!("Registered gateway families: {:?}", registry.registered());

    // Create the dispatch service
    let service = DispatchService::new(registry);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
