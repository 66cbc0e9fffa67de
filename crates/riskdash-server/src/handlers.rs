//! Request handlers.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use riskdash_analytics::{
    alert_summary, compute_weights, derive_view, DashboardConfig, DashboardView, SampleWeights,
    TickerAlertCount,
};
use riskdash_core::{DashboardError, Dataset, LoadError, Ticker};
use riskdash_ext_file::ObservationCache;

/// Application state.
pub struct AppState {
    /// Loaded tables, shared by all requests
    pub cache: Arc<ObservationCache>,
    /// Observation table served by this instance
    pub data_file: PathBuf,
    /// Default view settings
    pub dashboard: DashboardConfig,
}

impl AppState {
    /// Create application state.
    pub fn new(cache: Arc<ObservationCache>, data_file: PathBuf, dashboard: DashboardConfig) -> Self {
        Self {
            cache,
            data_file,
            dashboard,
        }
    }

    /// The shared table, loaded on first use.
    pub async fn dataset(&self) -> Result<Arc<Dataset>, ApiError> {
        let cache = Arc::clone(&self.cache);
        let path = self.data_file.clone();
        tokio::task::spawn_blocking(move || cache.get_or_load(&path))
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?
            .map_err(ApiError::from)
    }

    /// Reloads the table unconditionally.
    pub async fn refresh(&self) -> Result<Arc<Dataset>, ApiError> {
        let cache = Arc::clone(&self.cache);
        let path = self.data_file.clone();
        tokio::task::spawn_blocking(move || cache.refresh(&path))
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?
            .map_err(ApiError::from)
    }
}

/// Handler error, mapped to an HTTP status.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The table could not be loaded; nothing can be rendered.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The ticker is not part of the loaded universe.
    #[error("Unknown ticker: {0}")]
    UnknownTicker(String),

    /// A section could not be computed.
    #[error(transparent)]
    Dashboard(DashboardError),

    /// Request parameter out of range.
    #[error("Invalid parameter: {0}")]
    BadRequest(String),

    /// Unexpected failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DashboardError> for ApiError {
    fn from(e: DashboardError) -> Self {
        match e {
            DashboardError::Load(load) => ApiError::Load(load),
            DashboardError::UnknownTicker { ticker } => ApiError::UnknownTicker(ticker),
            other => ApiError::Dashboard(other),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Load(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::UnknownTicker(_) => StatusCode::NOT_FOUND,
            ApiError::Dashboard(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Error response.
#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

impl ErrorResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Ticker universe response.
#[derive(Serialize)]
pub struct TickersResponse {
    /// Selector choices in first-seen order.
    pub tickers: Vec<Ticker>,
    /// Initial selection.
    pub default_selection: Option<Ticker>,
    /// Rows in the table.
    pub rows: usize,
}

/// List the tickers available for selection.
pub async fn list_tickers(State(state): State<Arc<AppState>>) -> Result<Json<TickersResponse>, ApiError> {
    let data = state.dataset().await?;
    Ok(Json(TickersResponse {
        tickers: data.tickers().to_vec(),
        default_selection: data.default_selection().cloned(),
        rows: data.len(),
    }))
}

/// Optional per-request view settings.
#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    /// Alert threshold override.
    pub threshold: Option<f64>,
    /// Raw tail length override.
    pub tail: Option<usize>,
}

impl ViewQuery {
    fn apply(&self, base: &DashboardConfig) -> Result<DashboardConfig, ApiError> {
        let mut config = base.clone();
        if let Some(threshold) = self.threshold {
            if !threshold.is_finite() {
                return Err(ApiError::BadRequest(format!("threshold {threshold}")));
            }
            config = config.with_risk_threshold(threshold);
        }
        if let Some(tail) = self.tail {
            config = config.with_raw_tail_rows(tail);
        }
        Ok(config)
    }
}

/// Derive the dashboard view for one ticker.
pub async fn get_view(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
    query: Result<Query<ViewQuery>, QueryRejection>,
) -> Result<Json<DashboardView>, ApiError> {
    let Query(query) = query?;
    let config = query.apply(&state.dashboard)?;
    let data = state.dataset().await?;

    let selection = Ticker::new(&ticker);
    if !data.contains_ticker(&selection) {
        return Err(DashboardError::unknown_ticker(ticker).into());
    }

    let view = derive_view(&data, &selection, &config);
    tracing::debug!(
        ticker = %view.ticker,
        rows = view.row_count,
        alert = view.alert.is_some(),
        "Derived view"
    );
    Ok(Json(view))
}

/// Sample portfolio weights.
pub async fn get_weights(State(state): State<Arc<AppState>>) -> Result<Json<SampleWeights>, ApiError> {
    let data = state.dataset().await?;
    Ok(Json(compute_weights(data.observations())?))
}

/// Threshold-only query.
#[derive(Debug, Default, Deserialize)]
pub struct AlertQuery {
    /// Alert threshold override.
    pub threshold: Option<f64>,
}

/// Breach counts per ticker.
pub async fn get_alerts(
    State(state): State<Arc<AppState>>,
    query: Result<Query<AlertQuery>, QueryRejection>,
) -> Result<Json<Vec<TickerAlertCount>>, ApiError> {
    let Query(query) = query?;
    let config = ViewQuery {
        threshold: query.threshold,
        tail: None,
    }
    .apply(&state.dashboard)?;
    let data = state.dataset().await?;
    Ok(Json(alert_summary(&data, config.risk_threshold)))
}

/// Refresh response.
#[derive(Serialize)]
pub struct RefreshResponse {
    /// Rows after reload.
    pub rows: usize,
    /// Tickers after reload.
    pub tickers: usize,
}

/// Reload the observation table.
pub async fn refresh(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let data = state.refresh().await?;
    tracing::info!(rows = data.len(), tickers = data.tickers().len(), "Observation table refreshed");
    Ok((
        StatusCode::OK,
        Json(RefreshResponse {
            rows: data.len(),
            tickers: data.tickers().len(),
        }),
    ))
}
