//! Integration tests for riskdash-analytics.
//!
//! These tests drive the public API the way a presentation layer does: build a
//! dataset, pick a ticker, derive the view.

use approx::assert_relative_eq;
use riskdash_analytics::prelude::*;
use riskdash_core::prelude::*;

// =============================================================================
// TEST FIXTURES
// =============================================================================

fn date(s: &str) -> Date {
    Date::parse(s).unwrap()
}

/// Three tickers over a quarter, deliberately not sorted by date.
fn quarter_dataset() -> Dataset {
    Dataset::new(vec![
        Observation::new(date("2023-01-03"), "AAPL", 125.07, 62.0, 1.18, 0.91),
        Observation::new(date("2023-01-03"), "MSFT", 239.58, 48.5, 0.97, 1.12),
        Observation::new(date("2023-01-03"), "TSLA", 108.10, 88.4, 2.05, -0.35),
        Observation::new(date("2023-03-01"), "AAPL", 145.31, 71.2, 1.21, 0.95),
        Observation::new(date("2023-02-01"), "AAPL", 145.43, 69.9, 1.20, 0.93),
        Observation::new(date("2023-02-01"), "MSFT", 247.81, 50.1, 0.98, 1.15),
        Observation::new(date("2023-02-01"), "TSLA", 181.41, 92.0, 2.11, 0.12),
        Observation::new(date("2023-03-01"), "MSFT", 246.27, 49.7, 0.99, 1.10),
        Observation::new(date("2023-03-01"), "TSLA", 207.46, 70.0, 2.02, 0.28),
    ])
}

// =============================================================================
// FILTER
// =============================================================================

#[test]
fn test_filter_partitions_the_dataset() {
    let data = quarter_dataset();
    let mut total = 0;
    for ticker in data.tickers() {
        let rows = filter_by_ticker(data.observations(), ticker);
        assert!(rows.iter().all(|o| &o.ticker == ticker));
        total += rows.len();
    }
    assert_eq!(total, data.len());
}

#[test]
fn test_universe_matches_dataset() {
    let data = quarter_dataset();
    assert_eq!(ticker_universe(data.observations()), data.tickers().to_vec());
    assert_eq!(data.default_selection().unwrap().as_str(), "AAPL");
}

// =============================================================================
// THRESHOLD
// =============================================================================

#[test]
fn test_threshold_example_values() {
    let rows: Vec<Observation> = [65.0, 71.0, 80.0, 70.0]
        .iter()
        .map(|r| Observation::new(date("2023-01-01"), "X", 1.0, *r, 1.0, 1.0))
        .collect();

    let hits = exceeds_threshold(&rows, 70.0);
    let scores: Vec<f64> = hits.iter().map(|o| o.risk_score).collect();
    assert_eq!(scores, vec![71.0, 80.0]);
}

#[test]
fn test_alert_counts_per_ticker() {
    let summary = alert_summary(&quarter_dataset(), 70.0);
    let counts: Vec<(&str, usize)> = summary
        .iter()
        .map(|s| (s.ticker.as_str(), s.breaches))
        .collect();
    // TSLA's 70.0 sits exactly on the threshold and does not count.
    assert_eq!(counts, vec![("AAPL", 1), ("MSFT", 0), ("TSLA", 2)]);
}

// =============================================================================
// WEIGHTS
// =============================================================================

#[test]
fn test_weights_two_tickers() {
    let rows = vec![
        Observation::new(date("2023-01-01"), "A", 50.0, 1.0, 1.0, 1.0),
        Observation::new(date("2023-01-01"), "B", 150.0, 1.0, 1.0, 1.0),
    ];
    let weights = compute_weights(&rows).unwrap();
    assert_relative_eq!(weights.weight("A").unwrap(), 0.25);
    assert_relative_eq!(weights.weight("B").unwrap(), 0.75);
    assert_relative_eq!(weights.total(), 1.0);
}

#[test]
fn test_weights_use_last_row_per_ticker() {
    let data = quarter_dataset();
    let weights = compute_weights(data.observations()).unwrap();

    // AAPL's last row in table order is the 2023-02-01 row.
    let total = 145.43 + 246.27 + 207.46;
    assert_relative_eq!(weights.weight("AAPL").unwrap(), 145.43 / total, epsilon = 1e-12);
    assert_relative_eq!(weights.total(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_weights_empty_policy() {
    let err = compute_weights(Dataset::default().observations()).unwrap_err();
    assert!(matches!(err, DashboardError::DivisionByZero { .. }));
}

// =============================================================================
// LATEST
// =============================================================================

#[test]
fn test_latest_by_date_ignores_input_order() {
    let data = quarter_dataset();
    let rows = filter_by_ticker(data.observations(), &Ticker::new("AAPL"));
    let latest = latest_by_date(rows.iter().copied()).unwrap();
    assert_eq!(latest.date, date("2023-03-01"));
    assert_eq!(latest.risk_score, 71.2);
}

// =============================================================================
// VIEW
// =============================================================================

#[test]
fn test_view_for_each_ticker() {
    let data = quarter_dataset();
    let config = DashboardConfig::default();

    for ticker in data.tickers() {
        let view = derive_view(&data, ticker, &config);
        assert_eq!(view.row_count, 3);
        assert!(view.metrics.is_some());
        assert_eq!(view.raw.len(), 3);
        assert_eq!(view.series.len(), 3);
        assert!(view.notices.is_empty());
        assert_eq!(view.allocation.as_ref().unwrap().len(), 3);
    }
}

#[test]
fn test_view_metrics_match_latest_row() {
    let view = derive_view(&quarter_dataset(), &Ticker::new("TSLA"), &DashboardConfig::default());

    let metrics = view.metrics.as_ref().unwrap();
    assert_eq!(metrics.date, date("2023-03-01"));
    let displays: Vec<&str> = view.cards.iter().map(|c| c.display.as_str()).collect();
    assert_eq!(displays, vec!["70.0", "2.02", "0.28"]);

    let alert = view.alert.as_ref().unwrap();
    assert_eq!(alert.message(), "Risk Alert: 2 days where TSLA RiskScore exceeded 70!");
}

#[test]
fn test_raw_tail_bounded_to_100_rows() {
    let rows: Vec<Observation> = (0..250)
        .map(|i| {
            Observation::new(
                date("2020-01-01").add_days(i),
                "SPY",
                300.0 + i as f64,
                40.0,
                1.0,
                0.8,
            )
        })
        .collect();
    let data = Dataset::new(rows);

    let view = derive_view(&data, &Ticker::new("SPY"), &DashboardConfig::default());
    assert_eq!(view.raw.len(), 100);
    assert_eq!(view.raw.first().unwrap().adj_close, 450.0);
    assert_eq!(view.raw.last().unwrap().adj_close, 549.0);
}

#[test]
fn test_view_serializes_for_renderer() {
    let view = derive_view(&quarter_dataset(), &Ticker::new("MSFT"), &DashboardConfig::default());
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["ticker"], "MSFT");
    assert!(json["alert"].is_null());
    assert_eq!(json["series"][0]["metric"], "risk_score");
    assert_eq!(json["series"][0]["points"][0]["date"], "2023-01-03");
    assert!(json["allocation"]["AAPL"].is_number());
}
