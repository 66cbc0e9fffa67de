//! The loaded observation table.

use std::collections::HashSet;

use serde::Serialize;

use super::{Observation, Ticker};

/// Immutable, load-ordered observation sequence plus its ticker universe.
///
/// Built once per load and shared read-only (behind an `Arc`) by every
/// session that derives views from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    observations: Vec<Observation>,
    tickers: Vec<Ticker>,
}

impl Dataset {
    /// Wraps loaded observations, deriving the universe in first-seen order.
    ///
    /// Rows with a blank ticker are kept but never enter the universe.
    pub fn new(observations: Vec<Observation>) -> Self {
        let mut seen = HashSet::new();
        let tickers = observations
            .iter()
            .filter(|o| !o.ticker.is_blank() && seen.insert(o.ticker.clone()))
            .map(|o| o.ticker.clone())
            .collect();

        Self {
            observations,
            tickers,
        }
    }

    /// All observations in load order.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Distinct tickers in first-seen order.
    pub fn tickers(&self) -> &[Ticker] {
        &self.tickers
    }

    /// The selector's initial value: the first ticker seen.
    pub fn default_selection(&self) -> Option<&Ticker> {
        self.tickers.first()
    }

    /// True if the ticker appears in the table.
    pub fn contains_ticker(&self, ticker: &Ticker) -> bool {
        self.tickers.contains(ticker)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// True if no rows were loaded.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}
