//! Domain types for the dashboard.
//!
//! - [`Date`]: Calendar date of an observation
//! - [`Ticker`]: Instrument identifier
//! - [`Observation`]: One row of the source table
//! - [`Dataset`]: The loaded, immutable observation sequence

mod dataset;
mod date;
mod observation;
mod ticker;

pub use dataset::Dataset;
pub use date::{Date, ParseDateError};
pub use observation::Observation;
pub use ticker::Ticker;
