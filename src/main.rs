use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};

use frage::router::init_router;
use frage::state::init_app_state;
use frage_config::ServerConfig;
use frage_observability::{init_metrics, init_tracing, shutdown_tracer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing()?;
    let metrics = init_metrics()?;

    let state = init_app_state()
        .await
        .context("failed to initialise application state")?;
    let app = init_router(state, metrics);

    let config = ServerConfig::from_env();
    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    info!(addr = %config.addr, "Server running");
    info!("Swagger UI available at /swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    shutdown_tracer().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
