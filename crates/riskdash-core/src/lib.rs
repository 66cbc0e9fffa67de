//! # Riskdash Core
//!
//! Core types and error taxonomy for the Riskdash portfolio risk dashboard.
//!
//! This crate provides the building blocks shared by every other Riskdash crate:
//!
//! - **Types**: [`Date`], [`Ticker`], [`Observation`] and the loaded [`Dataset`]
//! - **Errors**: [`LoadError`] for source failures, [`DashboardError`] for everything
//!   the analytics layer can report
//!
//! ## Example
//!
//! ```rust
//! use riskdash_core::prelude::*;
//!
//! let obs = Observation::new(
//!     Date::from_ymd(2024, 3, 28).unwrap(),
//!     Ticker::new("AAPL"),
//!     171.48,
//!     64.2,
//!     1.21,
//!     0.87,
//! );
//! let data = Dataset::new(vec![obs]);
//! assert_eq!(data.tickers(), &[Ticker::new("AAPL")]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{DashboardError, DashboardResult, LoadError};
    pub use crate::types::{Dataset, Date, Observation, Ticker};
}

// Re-export commonly used types at crate root
pub use error::{DashboardError, DashboardResult, LoadError};
pub use types::{Dataset, Date, Observation, Ticker};
