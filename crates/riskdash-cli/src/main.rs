//! Riskdash CLI - Terminal front end for the portfolio risk dashboard.
//!
//! # Usage
//!
//! ```bash
//! # List the tickers available for selection
//! riskdash --data prices.csv tickers
//!
//! # Dashboard for one ticker, with trend series and raw data
//! riskdash --data prices.csv view AAPL --series --raw
//!
//! # Sample portfolio allocation
//! riskdash --data prices.csv weights --format json
//!
//! # Risk alerts across all tickers
//! riskdash --data prices.csv --threshold 80 alerts
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Session;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let session = Session::new(&cli)?;
    let format = cli.format;

    match cli.command {
        Commands::Tickers => commands::tickers::execute(&session, format)?,
        Commands::View(args) => commands::view::execute(&session, args, format)?,
        Commands::Weights => commands::weights::execute(&session, format)?,
        Commands::Alerts => commands::alerts::execute(&session, format)?,
    }

    Ok(())
}

/// Logs go to stderr so table/JSON output on stdout stays clean.
fn init_logging(verbose: bool) {
    let default = if verbose { "riskdash=debug,warn" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
