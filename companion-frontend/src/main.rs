use companion_frontend::config::{crate_dir, get_configuration};
use companion_frontend::services::companion_client::CompanionClient;
use companion_frontend::startup::build_router;
use companion_frontend::AppState;
use dotenvy::dotenv;
use service_core::observability::{init_metrics, init_tracing};
use service_core::shutdown::shutdown_signal;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "companion-frontend",
        &configuration.telemetry.log_level,
        configuration.telemetry.otlp_endpoint.as_deref(),
    );
    init_metrics();

    let companion_client = Arc::new(
        CompanionClient::new(configuration.api.clone())
            .map_err(|e| anyhow::anyhow!("Failed to create passage API client: {}", e))?,
    );
    info!(api = %configuration.api.base_url, "Using passage API");

    let static_dir = crate_dir()?.join("static");
    let app = build_router(AppState::new(companion_client), static_dir);

    let address = format!(
        "{}:{}",
        configuration.server.host, configuration.server.port
    );
    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!("Starting companion-frontend on {}", address);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            anyhow::anyhow!("Server error: {}", e)
        })?;

    Ok(())
}
