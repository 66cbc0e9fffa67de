//! Alerts command implementation.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use riskdash_analytics::alert_summary;

use crate::cli::OutputFormat;
use crate::commands::Session;
use crate::output::{print_header, print_output};

#[derive(Debug, Serialize, Tabled)]
struct AlertRow {
    #[tabled(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Rows")]
    rows: usize,
    #[tabled(rename = "Days Above")]
    breaches: usize,
    #[tabled(rename = "Alert")]
    alert: bool,
}

/// Execute the alerts command.
pub fn execute(session: &Session, format: OutputFormat) -> Result<()> {
    let data = session.dataset()?;
    let threshold = session.config().risk_threshold;

    let rows: Vec<AlertRow> = alert_summary(&data, threshold)
        .into_iter()
        .map(|s| AlertRow {
            ticker: s.ticker.to_string(),
            rows: s.rows,
            breaches: s.breaches,
            alert: s.breaches > 0,
        })
        .collect();

    if format == OutputFormat::Table {
        print_header(&format!("Risk Score > {threshold}"));
    }
    print_output(&rows, format)
}
