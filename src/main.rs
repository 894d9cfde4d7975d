//! Entry point for the ntfy-forwarder service binary.

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{error, info};

use ntfy_forwarder::{forwarder_router, AppState, ForwarderConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging with environment filter
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ntfy_forwarder=info".parse()?),
        )
        .init();

    info!("🚀 Starting ntfy-forwarder");

    let config = ForwarderConfig::from_env().context("Failed to load forwarder configuration")?;

    info!("Configuration:");
    info!("  ntfy URL: {}", config.ntfy_url);
    info!(
        "  Discord channel: {}",
        if config.discord_enabled() {
            "enabled"
        } else {
            "disabled"
        }
    );
    info!("  Bind address: {}", config.bind_addr);

    let bind_addr = config.bind_addr;
    let state = AppState::new(config).context("Failed to build forwarder state")?;
    let app = forwarder_router(state);

    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("✅ Listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("👋 ntfy-forwarder stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("🛑 Received shutdown signal");
}
