//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Ticker not present in the loaded table.
    #[error("Unknown ticker: {ticker}. Available: {available}")]
    UnknownTicker {
        /// Requested ticker.
        ticker: String,
        /// Comma-separated universe.
        available: String,
    },

    /// The table has no rows, so there is nothing to select.
    #[error("No observations in {0}")]
    EmptyDataset(String),

    /// Flags that cannot be combined.
    #[error("Cannot combine {0}")]
    ConflictingFlags(&'static str),

    /// Threshold is not a number.
    #[error("Invalid threshold: {0}. Must be a finite number.")]
    InvalidThreshold(f64),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
