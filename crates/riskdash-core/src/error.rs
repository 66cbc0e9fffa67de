//! Error types for Riskdash.
//!
//! [`LoadError`] covers everything that can go wrong while reading the source
//! table; it is fatal for a session. [`DashboardError`] wraps it and adds the
//! non-fatal conditions the view layer turns into notices.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// A specialized Result type for dashboard operations.
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Failure to load the observation table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The source file does not exist.
    #[error("Data source not found: {}", path.display())]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The source exists but could not be read.
    #[error("Failed to read {}: {reason}", path.display())]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O failure.
        reason: String,
    },

    /// One or more required columns are absent from the header row.
    #[error("{} is missing required column(s): {}", path.display(), columns.join(", "))]
    MissingColumns {
        /// Path being read.
        path: PathBuf,
        /// Names of the absent columns, in required-column order.
        columns: Vec<String>,
    },

    /// A data row could not be decoded.
    #[error("{} row {row}: {reason}", path.display())]
    Parse {
        /// Path being read.
        path: PathBuf,
        /// 1-based data row number (header excluded).
        row: usize,
        /// Decoder message.
        reason: String,
    },

    /// The Date column of a row is not a calendar date.
    #[error("{} row {row}: invalid date '{value}'", path.display())]
    InvalidDate {
        /// Path being read.
        path: PathBuf,
        /// 1-based data row number (header excluded).
        row: usize,
        /// The raw cell content.
        value: String,
    },
}

impl LoadError {
    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(path: impl AsRef<Path>) -> Self {
        Self::NotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Creates a missing-columns error.
    #[must_use]
    pub fn missing_columns(path: impl AsRef<Path>, columns: Vec<String>) -> Self {
        Self::MissingColumns {
            path: path.as_ref().to_path_buf(),
            columns,
        }
    }

    /// Creates a row parse error.
    #[must_use]
    pub fn parse(path: impl AsRef<Path>, row: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            row,
            reason: reason.into(),
        }
    }

    /// Path of the source that failed.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::Io { path, .. }
            | Self::MissingColumns { path, .. }
            | Self::Parse { path, .. }
            | Self::InvalidDate { path, .. } => path,
        }
    }
}

/// The main error type for dashboard operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// The source table could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A selection produced no rows.
    #[error("No observations for {context}")]
    EmptyInput {
        /// What was being selected (usually the ticker).
        context: String,
    },

    /// A normalization had nothing to divide by.
    #[error("Division by zero in {operation}")]
    DivisionByZero {
        /// The operation that failed.
        operation: String,
    },

    /// The selected ticker is not part of the loaded universe.
    #[error("Unknown ticker: {ticker}")]
    UnknownTicker {
        /// The requested ticker.
        ticker: String,
    },
}

impl DashboardError {
    /// Creates an empty-input error.
    #[must_use]
    pub fn empty_input(context: impl Into<String>) -> Self {
        Self::EmptyInput {
            context: context.into(),
        }
    }

    /// Creates a division-by-zero error.
    #[must_use]
    pub fn division_by_zero(operation: impl Into<String>) -> Self {
        Self::DivisionByZero {
            operation: operation.into(),
        }
    }

    /// Creates an unknown-ticker error.
    #[must_use]
    pub fn unknown_ticker(ticker: impl Into<String>) -> Self {
        Self::UnknownTicker {
            ticker: ticker.into(),
        }
    }

    /// Returns true if the error blocks rendering of the whole dashboard.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Load(_))
    }
}
