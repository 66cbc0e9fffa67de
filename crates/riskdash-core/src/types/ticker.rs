//! Ticker identifier.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Short identifier for a tradable instrument (e.g. `AAPL`).
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker(pub String);

impl Ticker {
    /// Create a new ticker.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ticker as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for an empty or whitespace-only identifier, i.e. a missing ticker cell.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Ticker {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Ticker {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Borrow<str> for Ticker {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Ticker {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Ticker {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
