//! Property-based tests for dashboard invariants.
//!
//! These tests verify properties that should hold for any table:
//! - Filtering by every ticker reconstitutes the original rows
//! - Weights sum to 1
//! - The latest row is never older than any other row of the selection
//! - Threshold hits all satisfy the strict inequality

use riskdash_analytics::prelude::*;
use riskdash_core::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// Generates a shuffled multi-ticker table with N rows.
fn generate_dataset(n: usize, seed: u64) -> Dataset {
    let tickers = ["AAPL", "MSFT", "GOOG", "AMZN", "TSLA", "NVDA"];
    let base = Date::from_ymd(2022, 1, 1).unwrap();

    let rows = (0..n)
        .map(|i| {
            // Deterministic pseudo-random values based on seed and index
            let hash = simple_hash(seed, i as u64);
            Observation::new(
                base.add_days((hash % 720) as i64),
                tickers[(hash / 7) as usize % tickers.len()],
                1.0 + (hash % 50_000) as f64 / 100.0,
                (hash % 1_000) as f64 / 10.0,
                (hash % 300) as f64 / 100.0 - 0.5,
                (hash % 400) as f64 / 100.0 - 2.0,
            )
        })
        .collect();

    Dataset::new(rows)
}

fn simple_hash(seed: u64, i: u64) -> u64 {
    let mut x = seed ^ i.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    x ^= x >> 33;
    x = x.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    x ^= x >> 33;
    x
}

const SEEDS: [u64; 5] = [1, 7, 42, 1_234, 98_765];

// =============================================================================
// PROPERTIES
// =============================================================================

#[test]
fn prop_filter_union_is_original_multiset() {
    for seed in SEEDS {
        let data = generate_dataset(500, seed);

        let mut rebuilt: Vec<&Observation> = data
            .tickers()
            .iter()
            .flat_map(|t| filter_by_ticker(data.observations(), t))
            .collect();
        let mut original: Vec<&Observation> = data.observations().iter().collect();

        let key = |o: &&Observation| (o.ticker.clone(), o.date, o.adj_close.to_bits());
        rebuilt.sort_by_key(key);
        original.sort_by_key(key);
        assert_eq!(rebuilt, original, "seed {seed}");
    }
}

#[test]
fn prop_weights_sum_to_one() {
    for seed in SEEDS {
        let data = generate_dataset(300, seed);
        let weights = compute_weights(data.observations()).unwrap();
        assert!((weights.total() - 1.0).abs() < 1e-9, "seed {seed}");
        assert_eq!(weights.len(), data.tickers().len());
        assert!(weights.iter().all(|(_, w)| w > 0.0 && w < 1.0));
    }
}

#[test]
fn prop_latest_is_max_date() {
    for seed in SEEDS {
        let data = generate_dataset(200, seed);
        for ticker in data.tickers() {
            let rows = filter_by_ticker(data.observations(), ticker);
            let latest = latest_by_date(rows.iter().copied()).unwrap();
            assert!(rows.iter().all(|o| o.date <= latest.date), "seed {seed}");
        }
    }
}

#[test]
fn prop_threshold_hits_are_strict() {
    for seed in SEEDS {
        let data = generate_dataset(400, seed);
        for threshold in [0.0, 25.0, 70.0, 99.9] {
            let hits = exceeds_threshold(data.observations(), threshold);
            assert!(hits.iter().all(|o| o.risk_score > threshold));
            let misses = data.len() - hits.len();
            let expected_misses = data
                .observations()
                .iter()
                .filter(|o| o.risk_score <= threshold)
                .count();
            assert_eq!(misses, expected_misses);
        }
    }
}

#[test]
fn prop_view_raw_tail_is_suffix_of_selection() {
    for seed in SEEDS {
        let data = generate_dataset(600, seed);
        let config = DashboardConfig::default().with_raw_tail_rows(25);
        for ticker in data.tickers() {
            let rows = filter_by_ticker(data.observations(), ticker);
            let view = derive_view(&data, ticker, &config);
            let expected: Vec<Observation> = rows[rows.len().saturating_sub(25)..]
                .iter()
                .map(|o| (*o).clone())
                .collect();
            assert_eq!(view.raw, expected);
        }
    }
}
