//! Dashboard settings.

use serde::{Deserialize, Serialize};

/// Risk score above which a selection raises an alert.
pub const DEFAULT_RISK_THRESHOLD: f64 = 70.0;

/// Number of trailing rows in the raw-data view.
pub const DEFAULT_RAW_TAIL_ROWS: usize = 100;

/// Settings that shape a derived view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Strict lower bound for alerting risk scores.
    #[serde(default = "default_risk_threshold")]
    pub risk_threshold: f64,

    /// Maximum rows in the raw-data view.
    #[serde(default = "default_raw_tail_rows")]
    pub raw_tail_rows: usize,
}

fn default_risk_threshold() -> f64 {
    DEFAULT_RISK_THRESHOLD
}

fn default_raw_tail_rows() -> usize {
    DEFAULT_RAW_TAIL_ROWS
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            risk_threshold: default_risk_threshold(),
            raw_tail_rows: default_raw_tail_rows(),
        }
    }
}

impl DashboardConfig {
    /// Sets the alert threshold.
    #[must_use]
    pub fn with_risk_threshold(mut self, threshold: f64) -> Self {
        self.risk_threshold = threshold;
        self
    }

    /// Sets the raw-data tail length.
    #[must_use]
    pub fn with_raw_tail_rows(mut self, rows: usize) -> Self {
        self.raw_tail_rows = rows;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.risk_threshold, 70.0);
        assert_eq!(config.raw_tail_rows, 100);
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: DashboardConfig = serde_json::from_str(r#"{"risk_threshold": 80.0}"#).unwrap();
        assert_eq!(config.risk_threshold, 80.0);
        assert_eq!(config.raw_tail_rows, DEFAULT_RAW_TAIL_ROWS);
    }
}
