//! Riskdash server entry point.

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use riskdash_server::{Server, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,riskdash=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Riskdash Server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/riskdash.toml".to_string());

    let server_config = if std::path::Path::new(&config_path).exists() {
        info!("Loading configuration from {}", config_path);
        ServerConfig::from_file(&config_path)?
    } else {
        info!("Using default configuration");
        ServerConfig::default()
    };

    let preload = server_config.preload;
    let server = Server::new(server_config);

    // A failed preload is not fatal: requests report it until the file is fixed.
    if preload {
        match server.state().dataset().await {
            Ok(data) => info!(rows = data.len(), tickers = data.tickers().len(), "Preloaded observation table"),
            Err(e) => warn!(error = %e, "Preload failed"),
        }
    }

    server.start().await?;

    Ok(())
}
