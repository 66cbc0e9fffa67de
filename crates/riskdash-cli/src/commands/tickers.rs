//! Tickers command implementation.
//!
//! Lists the selector's choices in first-seen order.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use riskdash_analytics::filter_by_ticker;

use crate::cli::OutputFormat;
use crate::commands::Session;
use crate::output::print_output;

#[derive(Debug, Serialize, Tabled)]
struct TickerRow {
    #[tabled(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Rows")]
    rows: usize,
    #[tabled(rename = "First")]
    first_date: String,
    #[tabled(rename = "Last")]
    last_date: String,
}

/// Execute the tickers command.
pub fn execute(session: &Session, format: OutputFormat) -> Result<()> {
    let data = session.dataset()?;

    let rows: Vec<TickerRow> = data
        .tickers()
        .iter()
        .map(|ticker| {
            let selected = filter_by_ticker(data.observations(), ticker);
            let first = selected.iter().map(|o| o.date).min();
            let last = selected.iter().map(|o| o.date).max();
            TickerRow {
                ticker: ticker.to_string(),
                rows: selected.len(),
                first_date: first.map(|d| d.to_string()).unwrap_or_default(),
                last_date: last.map(|d| d.to_string()).unwrap_or_default(),
            }
        })
        .collect();

    match format {
        OutputFormat::Minimal => {
            for row in &rows {
                println!("{}", row.ticker);
            }
            Ok(())
        }
        _ => print_output(&rows, format),
    }
}
