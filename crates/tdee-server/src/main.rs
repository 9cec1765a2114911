//! TDEE Calculator HTTP Server
//!
//! Provides a REST API for BMR, TDEE, calorie goal and macro calculations.

use anyhow::Result;
use std::net::SocketAddr;
use tdee_server::api;
use tdee_server::config::ServerConfig;
use tdee_server::telemetry;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing first so configuration warnings are visible
    let tracing_handle = telemetry::init_tracing()?;

    // Load configuration
    let config = ServerConfig::load()?;
    tracing_handle.apply_log_level(&config.log_level)?;
    info!("Loaded configuration: {:?}", config);

    let app = api::rest::create_router(&config);

    // Start server
    let addr = config.bind_address();
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ TDEE API listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Calculate: POST http://{}/calculate", addr);
    info!(
        "  Rate limit: {} requests per {}s per client",
        config.rate_limit.max_requests, config.rate_limit.window_secs
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
