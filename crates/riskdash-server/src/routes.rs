//! Route definitions.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{self, AppState};

/// Create the API router.
///
/// # Arguments
/// * `state` - Shared cache, data source and view defaults
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health))
        .route("/api/v1/health", get(handlers::health))
        // Selector
        .route("/api/v1/tickers", get(handlers::list_tickers))
        // Dashboard
        .route("/api/v1/view/:ticker", get(handlers::get_view))
        .route("/api/v1/weights", get(handlers::get_weights))
        .route("/api/v1/alerts", get(handlers::get_alerts))
        // Cache
        .route("/api/v1/refresh", post(handlers::refresh))
        // State
        .with_state(state)
}
