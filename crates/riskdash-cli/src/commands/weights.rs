//! Weights command implementation.
//!
//! Shows the sample portfolio allocation derived from each ticker's last price.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use riskdash_analytics::{compute_weights, SampleWeights};

use crate::cli::OutputFormat;
use crate::commands::Session;
use crate::output::{format_percent, print_output};

/// One allocation row.
#[derive(Debug, Serialize, Tabled)]
pub struct WeightRow {
    #[tabled(rename = "Ticker")]
    pub ticker: String,
    #[tabled(rename = "Weight")]
    pub weight: f64,
    #[tabled(rename = "Allocation")]
    pub allocation: String,
}

/// Rows ordered by ticker.
pub fn weight_rows(weights: &SampleWeights) -> Vec<WeightRow> {
    weights
        .iter()
        .map(|(ticker, weight)| WeightRow {
            ticker: ticker.to_string(),
            weight,
            allocation: format_percent(weight),
        })
        .collect()
}

/// Execute the weights command.
pub fn execute(session: &Session, format: OutputFormat) -> Result<()> {
    let data = session.dataset()?;
    let weights = compute_weights(data.observations())?;

    match format {
        OutputFormat::Json => crate::output::print_json_value(&weights),
        _ => print_output(&weight_rows(&weights), format),
    }
}
