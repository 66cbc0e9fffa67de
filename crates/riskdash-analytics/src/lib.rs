//! # Riskdash Analytics
//!
//! Data preparation for the portfolio risk dashboard.
//!
//! Every function here is pure: it takes loaded observations (or a
//! [`Dataset`](riskdash_core::Dataset)) plus explicit configuration and returns
//! computed results. Loading and caching live in `riskdash-ext-file`; rendering
//! lives in whatever consumes a [`DashboardView`].
//!
//! ## Quick Start
//!
//! ```rust
//! use riskdash_analytics::prelude::*;
//! use riskdash_core::prelude::*;
//!
//! let day = |d| Date::from_ymd(2024, 1, d).unwrap();
//! let data = Dataset::new(vec![
//!     Observation::new(day(1), "AAPL", 50.0, 72.0, 1.1, 0.9),
//!     Observation::new(day(1), "MSFT", 150.0, 40.0, 0.9, 1.2),
//! ]);
//!
//! let view = derive_view(&data, &Ticker::new("AAPL"), &DashboardConfig::default());
//! assert_eq!(view.alert.as_ref().map(|a| a.count), Some(1));
//! assert!((view.allocation.unwrap().weight("AAPL").unwrap() - 0.25).abs() < 1e-12);
//! ```
//!
//! ## Module Overview
//!
//! - [`filter`] - Ticker filter and ticker universe
//! - [`threshold`] - Risk score threshold check and alerts
//! - [`weights`] - Sample portfolio weights
//! - [`latest`] - Latest observation and metric cards
//! - [`view`] - One-pass view derivation for a selection
//! - [`config`] - Dashboard settings

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod filter;
pub mod latest;
pub mod threshold;
pub mod view;
pub mod weights;

pub use config::DashboardConfig;
pub use filter::{filter_by_ticker, ticker_universe};
pub use latest::{latest_by_date, LatestMetrics, MetricCard};
pub use threshold::{alert_summary, exceeds_threshold, risk_alert, RiskAlert, TickerAlertCount};
pub use view::{
    derive_view, DashboardView, MetricKind, MetricSeries, Notice, NoticeKind, SeriesPoint,
};
pub use weights::{compute_weights, SampleWeights};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::DashboardConfig;
    pub use crate::filter::{filter_by_ticker, ticker_universe};
    pub use crate::latest::{latest_by_date, LatestMetrics, MetricCard};
    pub use crate::threshold::{
        alert_summary, exceeds_threshold, risk_alert, RiskAlert, TickerAlertCount,
    };
    pub use crate::view::{
        derive_view, DashboardView, MetricKind, MetricSeries, Notice, NoticeKind,
    };
    pub use crate::weights::{compute_weights, SampleWeights};
}
