//! View derivation.
//!
//! [`derive_view`] is the single entry point a presentation layer calls on each
//! selection change. It runs one synchronous pass over the shared dataset:
//!
//! 1. filter rows for the selected ticker
//! 2. check the risk threshold
//! 3. pick the latest observation for the headline metrics
//! 4. build the three metric series
//! 5. compute the sample allocation over the whole universe
//! 6. keep the raw-data tail
//!
//! Non-fatal failures in steps 3 and 5 become [`Notice`]s; the remaining
//! sections are still populated.

use serde::Serialize;

use riskdash_core::{Dataset, Date, Observation, Ticker};

use crate::config::DashboardConfig;
use crate::filter::filter_by_ticker;
use crate::latest::{latest_by_date, LatestMetrics, MetricCard};
use crate::threshold::{risk_alert, RiskAlert};
use crate::weights::{compute_weights, SampleWeights};

/// The per-observation metrics charted over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Risk score.
    RiskScore,
    /// Beta.
    Beta,
    /// Sharpe ratio.
    SharpeRatio,
}

impl MetricKind {
    /// All charted metrics in display (tab) order.
    pub const ALL: [MetricKind; 3] = [MetricKind::RiskScore, MetricKind::Beta, MetricKind::SharpeRatio];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            MetricKind::RiskScore => "Risk Score",
            MetricKind::Beta => "Beta",
            MetricKind::SharpeRatio => "Sharpe Ratio",
        }
    }

    /// Reads this metric from an observation.
    pub fn value(self, obs: &Observation) -> f64 {
        match self {
            MetricKind::RiskScore => obs.risk_score,
            MetricKind::Beta => obs.beta,
            MetricKind::SharpeRatio => obs.sharpe_ratio,
        }
    }
}

/// One point of a line chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// X value.
    pub date: Date,
    /// Y value.
    pub value: f64,
}

/// A metric over time for the selected ticker, in table order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSeries {
    /// Which metric.
    pub metric: MetricKind,
    /// Chart title, e.g. `AAPL Beta Over Time`.
    pub title: String,
    /// Data points.
    pub points: Vec<SeriesPoint>,
}

impl MetricSeries {
    fn build(metric: MetricKind, ticker: &Ticker, rows: &[&Observation]) -> Self {
        Self {
            metric,
            title: format!("{} {} Over Time", ticker, metric.label()),
            points: rows
                .iter()
                .map(|o| SeriesPoint {
                    date: o.date,
                    value: metric.value(o),
                })
                .collect(),
        }
    }
}

/// Section of the dashboard a notice replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// Headline metrics could not be shown.
    Metrics,
    /// The allocation charts were skipped.
    Allocation,
}

/// A non-fatal condition shown in place of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Affected section.
    pub kind: NoticeKind,
    /// Message for the user.
    pub message: String,
}

/// Everything the dashboard shows for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// Selected ticker.
    pub ticker: Ticker,
    /// Rows for the selected ticker.
    pub row_count: usize,
    /// Threshold alert, if any row breached it.
    pub alert: Option<RiskAlert>,
    /// Metrics of the latest observation.
    pub metrics: Option<LatestMetrics>,
    /// Display cards for [`metrics`](Self::metrics); empty when metrics are absent.
    pub cards: Vec<MetricCard>,
    /// Risk score, beta and Sharpe ratio series, in that order.
    pub series: Vec<MetricSeries>,
    /// Sample allocation across the whole universe.
    pub allocation: Option<SampleWeights>,
    /// Trailing rows of the selection, table order.
    pub raw: Vec<Observation>,
    /// Sections that were skipped and why.
    pub notices: Vec<Notice>,
}

impl DashboardView {
    /// Series for one metric.
    pub fn series_for(&self, metric: MetricKind) -> Option<&MetricSeries> {
        self.series.iter().find(|s| s.metric == metric)
    }

    /// True if the selection produced no rows.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }
}

/// Derives the full view for `selection`.
///
/// Never fails. A selection with no rows yields empty series and a metrics
/// notice; an unweightable universe yields an allocation notice.
pub fn derive_view(dataset: &Dataset, selection: &Ticker, config: &DashboardConfig) -> DashboardView {
    let rows = filter_by_ticker(dataset.observations(), selection);
    let mut notices = Vec::new();

    let alert = risk_alert(selection, rows.iter().copied(), config.risk_threshold);

    let metrics = match latest_by_date(rows.iter().copied()) {
        Ok(latest) => Some(LatestMetrics::from_observation(latest)),
        Err(_) => {
            notices.push(Notice {
                kind: NoticeKind::Metrics,
                message: format!("No observations for ticker {selection}"),
            });
            None
        }
    };
    let cards = metrics.as_ref().map(|m| m.cards().to_vec()).unwrap_or_default();

    let series = MetricKind::ALL
        .iter()
        .map(|metric| MetricSeries::build(*metric, selection, &rows))
        .collect();

    let allocation = match compute_weights(dataset.observations()) {
        Ok(weights) => Some(weights),
        Err(e) => {
            notices.push(Notice {
                kind: NoticeKind::Allocation,
                message: format!("Portfolio composition skipped: {e}"),
            });
            None
        }
    };

    let tail_start = rows.len().saturating_sub(config.raw_tail_rows);
    let raw = rows[tail_start..].iter().map(|o| (*o).clone()).collect();

    DashboardView {
        ticker: selection.clone(),
        row_count: rows.len(),
        alert,
        metrics,
        cards,
        series,
        allocation,
        raw,
        notices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(ticker: &str, day: u32, price: f64, risk: f64) -> Observation {
        Observation::new(Date::from_ymd(2023, 1, day).unwrap(), ticker, price, risk, 1.0, 0.5)
    }

    fn sample() -> Dataset {
        Dataset::new(vec![
            obs("A", 2, 40.0, 75.0),
            obs("B", 1, 150.0, 30.0),
            obs("A", 1, 50.0, 65.0),
            obs("A", 3, 50.0, 80.0),
        ])
    }

    #[test]
    fn test_view_sections() {
        let view = derive_view(&sample(), &Ticker::new("A"), &DashboardConfig::default());

        assert_eq!(view.row_count, 3);
        assert_eq!(view.alert.as_ref().unwrap().count, 2);
        assert_eq!(view.metrics.as_ref().unwrap().date, Date::from_ymd(2023, 1, 3).unwrap());
        assert_eq!(view.cards.len(), 3);
        assert_eq!(view.series.len(), 3);
        assert_eq!(view.series_for(MetricKind::Beta).unwrap().title, "A Beta Over Time");
        assert!(view.notices.is_empty());

        let allocation = view.allocation.unwrap();
        assert!((allocation.weight("A").unwrap() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_series_keep_table_order() {
        let view = derive_view(&sample(), &Ticker::new("A"), &DashboardConfig::default());
        let risk = view.series_for(MetricKind::RiskScore).unwrap();
        let values: Vec<f64> = risk.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![75.0, 65.0, 80.0]);
    }

    #[test]
    fn test_raw_tail() {
        let config = DashboardConfig::default().with_raw_tail_rows(2);
        let view = derive_view(&sample(), &Ticker::new("A"), &config);
        let days: Vec<u32> = view.raw.iter().map(|o| o.date.day()).collect();
        assert_eq!(days, vec![1, 3]);
    }

    #[test]
    fn test_unknown_selection_degrades() {
        let view = derive_view(&sample(), &Ticker::new("Z"), &DashboardConfig::default());
        assert!(view.is_empty());
        assert!(view.alert.is_none());
        assert!(view.metrics.is_none());
        assert!(view.cards.is_empty());
        assert!(view.raw.is_empty());
        assert!(view.series.iter().all(|s| s.points.is_empty()));
        assert_eq!(view.notices.len(), 1);
        assert_eq!(view.notices[0].kind, NoticeKind::Metrics);
        assert!(view.allocation.is_some());
    }

    #[test]
    fn test_allocation_skipped_on_zero_prices() {
        let data = Dataset::new(vec![obs("A", 1, 0.0, 10.0)]);
        let view = derive_view(&data, &Ticker::new("A"), &DashboardConfig::default());
        assert!(view.allocation.is_none());
        assert!(view.metrics.is_some());
        assert_eq!(view.notices.len(), 1);
        assert_eq!(view.notices[0].kind, NoticeKind::Allocation);
        assert!(view.notices[0].message.contains("Division by zero"));
    }

    #[test]
    fn test_threshold_from_config() {
        let config = DashboardConfig::default().with_risk_threshold(78.0);
        let view = derive_view(&sample(), &Ticker::new("A"), &config);
        assert_eq!(view.alert.unwrap().count, 1);
    }
}
