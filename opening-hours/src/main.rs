use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use opening_hours::config::ServerConfig;
use opening_hours::web::{AppState, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("opening_hours=info,tower_http=info")),
        )
        .with_target(false)
        .init();

    let config = ServerConfig::from_env()?;

    // Build app state
    let state = AppState::new(&config.cache);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Opening hours service listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET  /health     - Health check");
    info!("  GET  /api/hours  - Evaluate an opening_hours value (opening_hours, day, time)");

    axum::serve(listener, app).await?;

    Ok(())
}
