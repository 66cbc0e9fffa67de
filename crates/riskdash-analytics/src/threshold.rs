//! Risk score threshold check.

use serde::Serialize;

use riskdash_core::{Dataset, Observation, Ticker};

use crate::filter::filter_by_ticker;

/// Rows whose risk score is strictly above `threshold`.
///
/// Missing (`NaN`) scores never match.
pub fn exceeds_threshold<'a, I>(observations: I, threshold: f64) -> Vec<&'a Observation>
where
    I: IntoIterator<Item = &'a Observation>,
{
    observations
        .into_iter()
        .filter(|o| o.risk_score > threshold)
        .collect()
}

/// A user-visible warning that a ticker breached the risk threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAlert {
    /// The selected ticker.
    pub ticker: Ticker,
    /// Threshold that was exceeded.
    pub threshold: f64,
    /// Number of rows (days) above the threshold.
    pub count: usize,
}

impl RiskAlert {
    /// Message shown to the user.
    pub fn message(&self) -> String {
        format!(
            "Risk Alert: {} days where {} RiskScore exceeded {}!",
            self.count, self.ticker, self.threshold
        )
    }
}

/// Builds the alert for an already filtered selection, if any row breaches.
pub fn risk_alert<'a, I>(ticker: &Ticker, observations: I, threshold: f64) -> Option<RiskAlert>
where
    I: IntoIterator<Item = &'a Observation>,
{
    let count = exceeds_threshold(observations, threshold).len();
    (count > 0).then(|| RiskAlert {
        ticker: ticker.clone(),
        threshold,
        count,
    })
}

/// Breach count for one ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickerAlertCount {
    /// Ticker.
    pub ticker: Ticker,
    /// Rows for the ticker.
    pub rows: usize,
    /// Rows above the threshold.
    pub breaches: usize,
}

/// Breach counts for every ticker in universe order.
pub fn alert_summary(dataset: &Dataset, threshold: f64) -> Vec<TickerAlertCount> {
    dataset
        .tickers()
        .iter()
        .map(|ticker| {
            let rows = filter_by_ticker(dataset.observations(), ticker);
            TickerAlertCount {
                ticker: ticker.clone(),
                rows: rows.len(),
                breaches: exceeds_threshold(rows.iter().copied(), threshold).len(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskdash_core::Date;

    fn obs(ticker: &str, risk: f64) -> Observation {
        Observation::new(Date::from_ymd(2023, 1, 1).unwrap(), ticker, 10.0, risk, 1.0, 1.0)
    }

    #[test]
    fn test_strict_inequality() {
        let data: Vec<_> = [65.0, 71.0, 80.0, 70.0].iter().map(|r| obs("A", *r)).collect();
        let hits: Vec<f64> = exceeds_threshold(&data, 70.0).iter().map(|o| o.risk_score).collect();
        assert_eq!(hits, vec![71.0, 80.0]);
    }

    #[test]
    fn test_nan_never_exceeds() {
        let data = vec![obs("A", f64::NAN), obs("A", 90.0)];
        assert_eq!(exceeds_threshold(&data, 70.0).len(), 1);
    }

    #[test]
    fn test_alert_message() {
        let data = vec![obs("TSLA", 75.0), obs("TSLA", 91.5), obs("TSLA", 10.0)];
        let alert = risk_alert(&Ticker::new("TSLA"), &data, 70.0).unwrap();
        assert_eq!(alert.count, 2);
        assert_eq!(alert.message(), "Risk Alert: 2 days where TSLA RiskScore exceeded 70!");
    }

    #[test]
    fn test_no_alert_when_nothing_breaches() {
        let data = vec![obs("A", 70.0)];
        assert!(risk_alert(&Ticker::new("A"), &data, 70.0).is_none());
    }

    #[test]
    fn test_alert_summary() {
        let data = Dataset::new(vec![obs("A", 75.0), obs("B", 20.0), obs("A", 10.0), obs("A", 99.0)]);
        let summary = alert_summary(&data, 70.0);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].ticker, Ticker::new("A"));
        assert_eq!((summary[0].rows, summary[0].breaches), (3, 2));
        assert_eq!((summary[1].rows, summary[1].breaches), (1, 0));
    }
}
