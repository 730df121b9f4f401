//! Raw catalog records.
//!
//! A `CardRecord` is one element of the catalog JSON dump. The dump is
//! loosely typed: numbers may arrive as JSON numbers or as strings, costs
//! may be symbolic ("X"), and most keys can be missing or `null`. Every field
//! here is optional so that deserializing a record never fails on shape alone.

use serde::{Deserialize, Deserializer, Serialize};

/// A numeric-or-symbolic stat value as written in the dump.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawStat {
    /// A JSON number.
    Int(i64),
    /// A JSON string (may hold a number, a symbol, or be empty).
    Text(String),
    /// Anything else (floats, booleans, arrays). Read as no value.
    Other(serde_json::Value),
}

/// Read a list that the dump may write as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// One printing of a card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintingRecord {
    #[serde(default)]
    pub image_url: Option<String>,
}

/// One card as it appears in the catalog dump.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardRecord {
    pub name: Option<String>,
    pub color: Option<String>,
    pub pitch: Option<RawStat>,
    pub cost: Option<RawStat>,
    pub power: Option<RawStat>,
    pub defense: Option<RawStat>,
    #[serde(deserialize_with = "null_as_empty")]
    pub types: Vec<String>,
    pub type_text: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub traits: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub card_keywords: Vec<String>,
    pub functional_text: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub printings: Vec<PrintingRecord>,
    pub cc_legal: Option<bool>,
    pub blitz_legal: Option<bool>,
    pub silver_age_legal: Option<bool>,
}

impl CardRecord {
    /// Create a record with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// First artwork reference across printings.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.printings
            .iter()
            .find_map(|p| p.image_url.as_deref())
    }
}
