//! Ticker selection.

use std::collections::HashSet;

use riskdash_core::{Observation, Ticker};

/// Returns the rows for one ticker, in input order.
///
/// Never fails; an unknown ticker yields an empty vector.
pub fn filter_by_ticker<'a>(observations: &'a [Observation], ticker: &Ticker) -> Vec<&'a Observation> {
    observations.iter().filter(|o| &o.ticker == ticker).collect()
}

/// Distinct tickers in first-seen order. Blank tickers are skipped.
pub fn ticker_universe(observations: &[Observation]) -> Vec<Ticker> {
    let mut seen = HashSet::new();
    observations
        .iter()
        .filter(|o| !o.ticker.is_blank() && seen.insert(&o.ticker))
        .map(|o| o.ticker.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskdash_core::Date;

    fn obs(ticker: &str, day: u32, risk: f64) -> Observation {
        Observation::new(Date::from_ymd(2024, 5, day).unwrap(), ticker, 10.0, risk, 1.0, 1.0)
    }

    #[test]
    fn test_filter_preserves_order() {
        let data = vec![obs("A", 3, 1.0), obs("B", 1, 2.0), obs("A", 1, 3.0), obs("A", 2, 4.0)];
        let rows = filter_by_ticker(&data, &Ticker::new("A"));
        let risks: Vec<f64> = rows.iter().map(|o| o.risk_score).collect();
        assert_eq!(risks, vec![1.0, 3.0, 4.0]);
    }

    #[test]
    fn test_filter_unknown_ticker_is_empty() {
        let data = vec![obs("A", 1, 1.0)];
        assert!(filter_by_ticker(&data, &Ticker::new("Z")).is_empty());
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let data = vec![obs("aapl", 1, 1.0), obs("AAPL", 2, 2.0)];
        assert_eq!(filter_by_ticker(&data, &Ticker::new("AAPL")).len(), 1);
    }

    #[test]
    fn test_universe() {
        let data = vec![obs("B", 1, 1.0), obs("A", 1, 1.0), obs("B", 2, 1.0)];
        assert_eq!(ticker_universe(&data), vec![Ticker::new("B"), Ticker::new("A")]);
        assert!(ticker_universe(&[]).is_empty());
    }

    #[test]
    fn test_universe_skips_blank() {
        let data = vec![obs("", 1, 1.0), obs("A", 1, 1.0)];
        assert_eq!(ticker_universe(&data), vec![Ticker::new("A")]);
    }
}
