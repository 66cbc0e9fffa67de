//! Sample portfolio weights.
//!
//! Each ticker's weight is its last adjusted close in table order divided by
//! the sum of those prices across the universe. Table order, not date order:
//! a table that is not sorted by date per ticker gets the price of its last
//! row, not of its most recent date.

use std::collections::BTreeMap;

use serde::Serialize;

use riskdash_core::{DashboardError, DashboardResult, Observation, Ticker};

/// Normalized allocation per ticker, ordered by ticker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SampleWeights {
    weights: BTreeMap<Ticker, f64>,
}

impl SampleWeights {
    /// Weight for a ticker.
    pub fn weight(&self, ticker: &str) -> Option<f64> {
        self.weights.get(ticker).copied()
    }

    /// `(ticker, weight)` pairs ordered by ticker.
    pub fn iter(&self) -> impl Iterator<Item = (&Ticker, f64)> + '_ {
        self.weights.iter().map(|(t, w)| (t, *w))
    }

    /// Ticker labels in weight order, for pie and treemap charts.
    pub fn labels(&self) -> Vec<&Ticker> {
        self.weights.keys().collect()
    }

    /// Weight values aligned with [`labels`](Self::labels).
    pub fn values(&self) -> Vec<f64> {
        self.weights.values().copied().collect()
    }

    /// Sum of all weights; 1.0 up to rounding.
    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Number of weighted tickers.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True if no ticker carries a weight.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Computes sample weights from the last non-missing adjusted close per ticker.
///
/// Rows with a blank ticker are not weighted. Tickers without any
/// non-missing price are left out.
///
/// # Errors
///
/// [`DashboardError::DivisionByZero`] when there is nothing to weight or the
/// price sum is zero or not finite.
pub fn compute_weights<'a, I>(observations: I) -> DashboardResult<SampleWeights>
where
    I: IntoIterator<Item = &'a Observation>,
{
    let mut last_price: BTreeMap<&Ticker, f64> = BTreeMap::new();
    for obs in observations {
        if !obs.adj_close.is_nan() && !obs.ticker.is_blank() {
            last_price.insert(&obs.ticker, obs.adj_close);
        }
    }

    let total: f64 = last_price.values().sum();
    if last_price.is_empty() || total == 0.0 || !total.is_finite() {
        return Err(DashboardError::division_by_zero("sample weights"));
    }

    Ok(SampleWeights {
        weights: last_price
            .into_iter()
            .map(|(ticker, price)| (ticker.clone(), price / total))
            .collect(),
    })
}
