//! CSV observation source.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use riskdash_core::{Dataset, Date, LoadError, Observation, Ticker};

/// Columns every source table must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 6] = ["Date", "Ticker", "Adj Close", "RiskScore", "Beta", "SharpeRatio"];

/// CSV record for observations.
#[derive(Debug, Deserialize)]
struct ObservationRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Ticker")]
    ticker: String,
    #[serde(rename = "Adj Close")]
    adj_close: Option<f64>,
    #[serde(rename = "RiskScore")]
    risk_score: Option<f64>,
    #[serde(rename = "Beta")]
    beta: Option<f64>,
    #[serde(rename = "SharpeRatio")]
    sharpe_ratio: Option<f64>,
}

impl ObservationRecord {
    fn into_observation(self, origin: &Path, row: usize) -> Result<Observation, LoadError> {
        let date = Date::parse(&self.date).map_err(|_| LoadError::InvalidDate {
            path: origin.to_path_buf(),
            row,
            value: self.date.clone(),
        })?;

        Ok(Observation {
            date,
            ticker: Ticker::new(self.ticker),
            adj_close: self.adj_close.unwrap_or(f64::NAN),
            risk_score: self.risk_score.unwrap_or(f64::NAN),
            beta: self.beta.unwrap_or(f64::NAN),
            sharpe_ratio: self.sharpe_ratio.unwrap_or(f64::NAN),
        })
    }
}

/// Parses observations from any CSV reader.
///
/// `origin` only labels errors. Rows keep their input order.
pub fn parse_observations<R: Read>(input: R, origin: &Path) -> Result<Vec<Observation>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| LoadError::io(origin, e.to_string()))?
        .clone();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| (*col).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::missing_columns(origin, missing));
    }

    let mut observations = Vec::new();
    for (idx, result) in reader.deserialize::<ObservationRecord>().enumerate() {
        let row = idx + 1;
        let record = result.map_err(|e| LoadError::parse(origin, row, e.to_string()))?;
        observations.push(record.into_observation(origin, row)?);
    }

    Ok(observations)
}

/// Loads observations from a CSV file.
///
/// # Errors
///
/// [`LoadError::NotFound`] if the file is absent, [`LoadError::Io`] if it
/// cannot be opened, [`LoadError::MissingColumns`] if required headers are
/// absent, and a row-level error for the first row that does not decode.
pub fn load_observations(path: impl AsRef<Path>) -> Result<Vec<Observation>, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::not_found(path));
    }

    let file = File::open(path).map_err(|e| LoadError::io(path, e.to_string()))?;
    let observations = parse_observations(file, path)?;

    tracing::debug!(path = %path.display(), rows = observations.len(), "Loaded observations");
    Ok(observations)
}

/// Loads a CSV file into a [`Dataset`].
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    load_observations(path).map(Dataset::new)
}
