//! A single row of the source table.

use serde::{Deserialize, Serialize};

use super::{Date, Ticker};

/// One ticker's metrics on one date.
///
/// Risk score, beta and Sharpe ratio are produced upstream and carried
/// verbatim. Missing numeric cells are `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Observation date.
    pub date: Date,
    /// Instrument identifier.
    pub ticker: Ticker,
    /// Adjusted close price.
    pub adj_close: f64,
    /// Pre-computed risk score (0-100 scale upstream).
    pub risk_score: f64,
    /// Pre-computed beta.
    pub beta: f64,
    /// Pre-computed Sharpe ratio.
    pub sharpe_ratio: f64,
}

impl Observation {
    /// Creates an observation.
    pub fn new(
        date: Date,
        ticker: impl Into<Ticker>,
        adj_close: f64,
        risk_score: f64,
        beta: f64,
        sharpe_ratio: f64,
    ) -> Self {
        Self {
            date,
            ticker: ticker.into(),
            adj_close,
            risk_score,
            beta,
            sharpe_ratio,
        }
    }
}
