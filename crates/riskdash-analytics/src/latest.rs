//! Latest observation and headline metrics.

use serde::Serialize;

use riskdash_core::{DashboardError, DashboardResult, Date, Observation, Ticker};

/// Returns the row with the greatest date.
///
/// Equivalent to a stable ascending sort by date followed by taking the last
/// element: among rows sharing the greatest date, the one appearing last in
/// input order wins.
///
/// # Errors
///
/// [`DashboardError::EmptyInput`] when there are no rows.
pub fn latest_by_date<'a, I>(observations: I) -> DashboardResult<&'a Observation>
where
    I: IntoIterator<Item = &'a Observation>,
{
    // `max_by_key` keeps the last of equal maxima.
    observations
        .into_iter()
        .max_by_key(|o| o.date)
        .ok_or_else(|| DashboardError::empty_input("latest-by-date selection"))
}

/// Headline metrics of a ticker's latest observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestMetrics {
    /// Ticker.
    pub ticker: Ticker,
    /// Date of the observation the metrics come from.
    pub date: Date,
    /// Risk score.
    pub risk_score: f64,
    /// Beta.
    pub beta: f64,
    /// Sharpe ratio.
    pub sharpe_ratio: f64,
}

/// A labeled scalar ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    /// Display label.
    pub label: &'static str,
    /// Raw value.
    pub value: f64,
    /// Value formatted to the card's precision.
    pub display: String,
}

impl MetricCard {
    fn new(label: &'static str, value: f64, precision: usize) -> Self {
        Self {
            label,
            value,
            display: format!("{value:.precision$}"),
        }
    }
}

impl LatestMetrics {
    /// Extracts the metrics from an observation.
    pub fn from_observation(obs: &Observation) -> Self {
        Self {
            ticker: obs.ticker.clone(),
            date: obs.date,
            risk_score: obs.risk_score,
            beta: obs.beta,
            sharpe_ratio: obs.sharpe_ratio,
        }
    }

    /// Risk score (1 decimal), beta and Sharpe ratio (2 decimals).
    pub fn cards(&self) -> [MetricCard; 3] {
        [
            MetricCard::new("Risk Score", self.risk_score, 1),
            MetricCard::new("Beta", self.beta, 2),
            MetricCard::new("Sharpe Ratio", self.sharpe_ratio, 2),
        ]
    }
}
