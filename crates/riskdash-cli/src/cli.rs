//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use riskdash_analytics::config::{DEFAULT_RAW_TAIL_ROWS, DEFAULT_RISK_THRESHOLD};
use riskdash_ext_file::DEFAULT_DATA_FILE;

use crate::commands::ViewArgs;

/// Riskdash - Portfolio risk and performance dashboard
#[derive(Parser)]
#[command(name = "riskdash")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// CSV table with Date, Ticker, Adj Close, RiskScore, Beta and SharpeRatio columns
    #[arg(short, long, env = "RISKDASH_DATA", default_value = DEFAULT_DATA_FILE, global = true)]
    pub data: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Risk score above which a ticker raises an alert
    #[arg(short, long, default_value_t = DEFAULT_RISK_THRESHOLD, global = true)]
    pub threshold: f64,

    /// Number of trailing rows shown in the raw data view
    #[arg(long, default_value_t = DEFAULT_RAW_TAIL_ROWS, global = true)]
    pub tail: usize,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List the tickers available for selection
    Tickers,

    /// Show the dashboard for one ticker
    View(ViewArgs),

    /// Show the sample portfolio allocation
    Weights,

    /// Count risk threshold breaches per ticker
    Alerts,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the values)
    Minimal,
}
