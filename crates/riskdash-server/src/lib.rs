//! # Riskdash Server
//!
//! REST server for the Riskdash portfolio risk dashboard.
//!
//! A browser-side renderer asks for the ticker universe once, then fetches a
//! derived view each time the user changes the selection. The observation
//! table is loaded once and shared read-only by all requests.
//!
//! ## Features
//!
//! - Ticker universe and default selection
//! - Per-ticker dashboard view (alert, metrics, series, allocation, raw tail)
//! - Sample weights and alert summary endpoints
//! - Explicit cache refresh
//! - Configuration via TOML file
//!
//! ## Usage
//!
//! ```ignore
//! use riskdash_server::{Server, ServerConfig};
//!
//! let server = Server::new(ServerConfig::default());
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod handlers;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use riskdash_ext_file::ObservationCache;

pub use config::ServerConfig;
pub use handlers::AppState;

/// The Riskdash server.
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Create a new server with its own observation cache.
    pub fn new(config: ServerConfig) -> Self {
        let state = Arc::new(AppState::new(
            Arc::new(ObservationCache::new()),
            config.data_file.clone().into(),
            config.dashboard.clone(),
        ));
        Self { config, state }
    }

    /// Shared application state.
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes::create_router(self.state())
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Start the server.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr()?;

        info!("Starting Riskdash server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}
