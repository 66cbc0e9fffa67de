//! CLI command implementations.

pub mod alerts;
pub mod tickers;
pub mod view;
pub mod weights;

pub use view::ViewArgs;

use std::path::PathBuf;
use std::sync::Arc;

use riskdash_analytics::DashboardConfig;
use riskdash_core::{Dataset, Ticker};
use riskdash_ext_file::ObservationCache;

use crate::cli::Cli;
use crate::error::{CliError, CliResult};

/// State for one CLI invocation: where the table lives and how views are shaped.
pub struct Session {
    data_path: PathBuf,
    config: DashboardConfig,
    cache: ObservationCache,
}

impl Session {
    /// Builds a session from parsed arguments.
    pub fn new(cli: &Cli) -> CliResult<Self> {
        if !cli.threshold.is_finite() {
            return Err(CliError::InvalidThreshold(cli.threshold));
        }

        Ok(Self {
            data_path: cli.data.clone(),
            config: DashboardConfig::default()
                .with_risk_threshold(cli.threshold)
                .with_raw_tail_rows(cli.tail),
            cache: ObservationCache::new(),
        })
    }

    /// The loaded table. Load failures are fatal for the invocation.
    pub fn dataset(&self) -> anyhow::Result<Arc<Dataset>> {
        let data = self.cache.get_or_load(&self.data_path)?;
        tracing::debug!(
            path = %self.data_path.display(),
            rows = data.len(),
            "Dataset ready"
        );
        Ok(data)
    }

    /// View settings.
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Path of the table, for messages.
    pub fn data_path(&self) -> &PathBuf {
        &self.data_path
    }
}

/// Resolves the ticker to show: the requested one if present in the universe,
/// otherwise the first ticker of the table.
pub fn resolve_selection(data: &Dataset, requested: Option<&str>, origin: &str) -> CliResult<Ticker> {
    match requested {
        Some(name) => {
            let ticker = Ticker::new(name);
            if data.contains_ticker(&ticker) {
                Ok(ticker)
            } else {
                Err(CliError::UnknownTicker {
                    ticker: name.to_string(),
                    available: data
                        .tickers()
                        .iter()
                        .map(Ticker::as_str)
                        .collect::<Vec<_>>()
                        .join(", "),
                })
            }
        }
        None => data
            .default_selection()
            .cloned()
            .ok_or_else(|| CliError::EmptyDataset(origin.to_string())),
    }
}
