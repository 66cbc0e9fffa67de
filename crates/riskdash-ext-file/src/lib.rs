//! # Riskdash Ext File
//!
//! File-based observation source for the Riskdash dashboard.
//!
//! - [`load_observations`] / [`load_dataset`]: read and validate the CSV table
//! - [`ObservationCache`]: explicit, source-keyed memoization of loaded tables
//!
//! The cache is a value owned by whoever serves a session (a CLI invocation,
//! the server's application state), never a process global.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod cache;
mod csv_source;

pub use cache::{ObservationCache, SourceKey};
pub use csv_source::{load_dataset, load_observations, parse_observations, REQUIRED_COLUMNS};

/// File name the dashboard reads when no path is configured.
pub const DEFAULT_DATA_FILE: &str = "stock_macro_risk_score_with_beta_sharpe.csv";
