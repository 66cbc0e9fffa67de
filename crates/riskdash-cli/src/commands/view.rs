//! View command implementation.
//!
//! Renders the dashboard for one ticker: risk alert, headline metrics,
//! portfolio composition, and optionally the trend series and raw data.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use riskdash_analytics::{derive_view, DashboardView, MetricKind};
use riskdash_core::Observation;

use crate::cli::OutputFormat;
use crate::commands::weights::weight_rows;
use crate::commands::{resolve_selection, Session};
use crate::error::CliError;
use crate::output::{print_divider, print_error, print_header, print_output, print_warning, KeyValue};

/// Arguments for the view command.
#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Ticker to show. Defaults to the first ticker in the table.
    pub ticker: Option<String>,

    /// Include the risk score, beta and Sharpe ratio series
    #[arg(long)]
    pub series: bool,

    /// Include the trailing raw rows of the selection
    #[arg(long)]
    pub raw: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct TrendRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Risk Score")]
    risk_score: f64,
    #[tabled(rename = "Beta")]
    beta: f64,
    #[tabled(rename = "Sharpe Ratio")]
    sharpe_ratio: f64,
}

#[derive(Debug, Serialize, Tabled)]
struct RawRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Adj Close")]
    adj_close: f64,
    #[tabled(rename = "RiskScore")]
    risk_score: f64,
    #[tabled(rename = "Beta")]
    beta: f64,
    #[tabled(rename = "SharpeRatio")]
    sharpe_ratio: f64,
}

impl From<&Observation> for RawRow {
    fn from(o: &Observation) -> Self {
        Self {
            date: o.date.to_string(),
            ticker: o.ticker.to_string(),
            adj_close: o.adj_close,
            risk_score: o.risk_score,
            beta: o.beta,
            sharpe_ratio: o.sharpe_ratio,
        }
    }
}

/// Execute the view command.
pub fn execute(session: &Session, args: ViewArgs, format: OutputFormat) -> Result<()> {
    let data = session.dataset()?;
    let origin = session.data_path().display().to_string();
    let selection = resolve_selection(&data, args.ticker.as_deref(), &origin)?;

    let view = derive_view(&data, &selection, session.config());
    tracing::debug!(
        ticker = %view.ticker,
        rows = view.row_count,
        notices = view.notices.len(),
        "Derived view"
    );

    match format {
        OutputFormat::Table => print_table(&view, &args),
        OutputFormat::Json => crate::output::print_json_value(&view),
        // One CSV table per invocation: raw rows, trend rows or the cards.
        OutputFormat::Csv => match (args.raw, args.series) {
            (true, true) => Err(CliError::ConflictingFlags("--raw and --series with --format csv").into()),
            (true, false) => {
                let rows: Vec<RawRow> = view.raw.iter().map(RawRow::from).collect();
                print_output(&rows, format)
            }
            (false, true) => print_output(&trend_rows(&view), format),
            (false, false) => print_output(&card_rows(&view), format),
        },
        OutputFormat::Minimal => {
            let line = view
                .cards
                .iter()
                .map(|c| format!("{}: {}", c.label, c.display))
                .collect::<Vec<_>>()
                .join(", ");
            println!("{line}");
            Ok(())
        }
    }
}

fn card_rows(view: &DashboardView) -> Vec<KeyValue> {
    view.cards
        .iter()
        .map(|c| KeyValue::new(c.label, c.display.clone()))
        .collect()
}

fn trend_rows(view: &DashboardView) -> Vec<TrendRow> {
    let (Some(risk), Some(beta), Some(sharpe)) = (
        view.series_for(MetricKind::RiskScore),
        view.series_for(MetricKind::Beta),
        view.series_for(MetricKind::SharpeRatio),
    ) else {
        return Vec::new();
    };

    risk.points
        .iter()
        .zip(&beta.points)
        .zip(&sharpe.points)
        .map(|((r, b), s)| TrendRow {
            date: r.date.to_string(),
            risk_score: r.value,
            beta: b.value,
            sharpe_ratio: s.value,
        })
        .collect()
}

fn print_table(view: &DashboardView, args: &ViewArgs) -> Result<()> {
    print_header(&format!("Portfolio Risk and Performance: {}", view.ticker));

    if let Some(alert) = &view.alert {
        print_error(&alert.message());
    }
    for notice in &view.notices {
        print_warning(&notice.message);
    }

    if let Some(metrics) = &view.metrics {
        print_header(&format!("Latest Metrics ({})", metrics.date));
        print_output(&card_rows(view), OutputFormat::Table)?;
    }

    if args.series {
        print_divider();
        print_header(&format!("{} Trends", view.ticker));
        print_output(&trend_rows(view), OutputFormat::Table)?;
    }

    if let Some(weights) = &view.allocation {
        print_divider();
        print_header("Portfolio Composition");
        print_output(&weight_rows(weights), OutputFormat::Table)?;
    }

    if args.raw {
        print_divider();
        print_header(&format!("Raw Data (last {} rows)", view.raw.len()));
        let rows: Vec<RawRow> = view.raw.iter().map(RawRow::from).collect();
        print_output(&rows, OutputFormat::Table)?;
    }

    Ok(())
}
