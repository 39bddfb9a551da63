// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc, time::Duration};

use dashboard_runtime::application::interpreter::DashboardInterpreter;
use dashboard_runtime::application::streaming_service::StreamingDashboardService;
use dashboard_runtime::infrastructure::config::load_runtime_config;
use dashboard_runtime::infrastructure::thingsboard_repository::ThingsboardRepository;
use dashboard_runtime::presentation::app_state::AppState;
use dashboard_runtime::presentation::router::build_router;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_runtime_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(ThingsboardRepository::new(
        config.backend.base_url.clone(),
        config.backend.token,
        Duration::from_secs(config.backend.timeout_secs),
    )?);

    // Create services (application layer)
    let dashboard_service = StreamingDashboardService::new(
        repository,
        DashboardInterpreter::default(),
        config.stream.channel_capacity,
    );

    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config.server.bind.parse()?;
    tracing::info!("Starting dashboard-runtime on {} (backend {})", addr, config.backend.base_url);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
