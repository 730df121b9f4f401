//! Play formats and per-card legality tables.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named ruleset that decides deck size, copy limits and card legality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Format {
    /// Classic Constructed.
    #[default]
    #[serde(rename = "CC")]
    CC,
    /// Blitz.
    #[serde(rename = "Blitz")]
    Blitz,
    /// Silver Age.
    #[serde(rename = "Silver Age")]
    SilverAge,
}

impl Format {
    /// All known formats.
    pub const ALL: [Format; 3] = [Format::CC, Format::Blitz, Format::SilverAge];

    /// Name used in deck lists and as the legality key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Format::CC => "CC",
            Format::Blitz => "Blitz",
            Format::SilverAge => "Silver Age",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known format.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown format: {0:?}")]
pub struct ParseFormatError(pub String);

impl std::str::FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Format::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ParseFormatError(s.to_string()))
    }
}

/// Per-format legality flags for one card.
///
/// Keys are format names as strings, so formats this crate does not model
/// can still be queried; anything not present is not legal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legalities(FxHashMap<String, bool>);

impl Legalities {
    /// Create an empty table (legal nowhere).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag for a format (builder pattern).
    #[must_use]
    pub fn with(mut self, format: impl Into<String>, legal: bool) -> Self {
        self.set(format, legal);
        self
    }

    /// Legal in every known format.
    #[must_use]
    pub fn everywhere() -> Self {
        Format::ALL
            .into_iter()
            .fold(Self::new(), |l, f| l.with(f.as_str(), true))
    }

    pub fn set(&mut self, format: impl Into<String>, legal: bool) {
        self.0.insert(format.into(), legal);
    }

    /// Flag for `format_name`, `false` if the name is not recognized.
    #[must_use]
    pub fn is_legal(&self, format_name: &str) -> bool {
        self.0.get(format_name).copied().unwrap_or(false)
    }
}
