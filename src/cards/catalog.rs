//! Card catalog for name lookup.
//!
//! The deck core only ever asks one question of the catalog: "which card has
//! this exact name?". That question is the `CardLookup` trait. `CardCatalog`
//! is the in-memory implementation built from the catalog JSON dump; tests
//! and shells may pass any closure instead.

use std::path::Path;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use super::card::Card;
use super::record::CardRecord;
use crate::error::CatalogError;

/// Resolve a card name to a card. Case-sensitive exact match.
pub trait CardLookup {
    fn lookup(&self, name: &str) -> Option<Arc<Card>>;
}

impl<F> CardLookup for F
where
    F: Fn(&str) -> Option<Arc<Card>>,
{
    fn lookup(&self, name: &str) -> Option<Arc<Card>> {
        self(name)
    }
}

/// In-memory catalog keyed by card name.
///
/// ## Example
///
/// ```
/// use fab_deck::cards::{Card, CardCatalog, CardLookup};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(Card::builder("Snatch").pitch(1).build());
///
/// let found = catalog.lookup("Snatch").unwrap();
/// assert_eq!(found.pitch, Some(1));
/// assert!(catalog.lookup("snatch").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<String, Arc<Card>>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card.
    ///
    /// The first card registered under a name wins; later cards with the same
    /// name (other pitch printings) are dropped. Returns whether the card was
    /// stored.
    pub fn register(&mut self, card: impl Into<Arc<Card>>) -> bool {
        let card = card.into();
        if self.cards.contains_key(&card.name) {
            debug!(name = %card.name, "duplicate card name, keeping first");
            return false;
        }
        self.cards.insert(card.name.clone(), card);
        true
    }

    /// Build a catalog from raw records, skipping records without a name.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CardRecord>,
    {
        let mut catalog = Self::new();
        let mut skipped = 0usize;
        for record in records {
            if record.name.as_deref().map_or(true, |n| n.trim().is_empty()) {
                skipped += 1;
                continue;
            }
            catalog.register(Card::from(record));
        }
        if skipped > 0 {
            warn!(skipped, "skipped catalog records without a name");
        }
        catalog
    }

    /// Parse the catalog dump (a JSON array of card records).
    ///
    /// Only a dump that is not a JSON array is an error. A single element
    /// that does not read as a card record is logged and skipped.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
        let records = values.into_iter().filter_map(|value| {
            let name = value
                .get("name")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned);
            match serde_json::from_value::<CardRecord>(value) {
                Ok(record) => Some(record),
                Err(err) => {
                    let name = name.as_deref().unwrap_or("<unnamed>");
                    warn!(name, %err, "failed to load card");
                    None
                }
            }
        });
        Ok(Self::from_records(records))
    }

    /// Read and parse the catalog dump from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        info!(path = %path.display(), cards = catalog.len(), "loaded card catalog");
        Ok(catalog)
    }

    /// Get a card by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<Card>> {
        self.cards.get(name)
    }

    /// Check if a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cards.contains_key(name)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Card>> {
        self.cards.values()
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Arc<Card>>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}

impl CardLookup for CardCatalog {
    fn lookup(&self, name: &str) -> Option<Arc<Card>> {
        self.cards.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = r#"[
        {"name": "Prism", "types": ["Illusionist", "Hero"], "type_text": "Illusionist Hero", "cc_legal": true},
        {"name": "Snatch", "pitch": "1", "cc_legal": true, "blitz_legal": true},
        {"name": "Snatch", "pitch": "2", "cc_legal": true, "blitz_legal": true},
        {"name": "", "pitch": "3"},
        {"pitch": "3"}
    ]"#;

    #[test]
    fn test_from_json_str() {
        let catalog = CardCatalog::from_json_str(DUMP).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("Prism"));
        assert!(catalog.get("Prism").unwrap().is_hero());
    }

    #[test]
    fn test_first_printing_wins() {
        let catalog = CardCatalog::from_json_str(DUMP).unwrap();
        assert_eq!(catalog.get("Snatch").unwrap().pitch, Some(1));
    }

    #[test]
    fn test_register_reports_duplicates() {
        let mut catalog = CardCatalog::new();
        assert!(catalog.register(Card::builder("A").build()));
        assert!(!catalog.register(Card::builder("A").pitch(2).build()));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = CardCatalog::from_json_str(DUMP).unwrap();
        assert!(catalog.lookup("Prism").is_some());
        assert!(catalog.lookup("prism").is_none());
        assert!(catalog.lookup("Prism ").is_none());
    }

    #[test]
    fn test_lookup_shares_the_same_card() {
        let catalog = CardCatalog::from_json_str(DUMP).unwrap();
        let a = catalog.lookup("Snatch").unwrap();
        let b = catalog.lookup("Snatch").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_find_with_predicate() {
        let catalog = CardCatalog::from_json_str(DUMP).unwrap();
        let heroes: Vec<_> = catalog.find(Card::is_hero).collect();
        assert_eq!(heroes.len(), 1);
        assert_eq!(heroes[0].name, "Prism");
        assert_eq!(catalog.iter().count(), 2);
    }

    #[test]
    fn test_malformed_record_is_skipped() {
        let dump = r#"[
            {"name": "Snatch", "pitch": "1", "cc_legal": true},
            {"name": "Prism", "types": null, "type_text": "Illusionist Hero"},
            {"name": "Fractal", "pitch": 1.0, "cost": "0"},
            {"name": "Broken", "cc_legal": "yes"},
            {"name": 7},
            "not a record"
        ]"#;
        let catalog = CardCatalog::from_json_str(dump).unwrap();

        assert_eq!(catalog.len(), 3);
        assert!(catalog.get("Prism").unwrap().is_hero());
        assert_eq!(catalog.get("Fractal").unwrap().pitch, None);
        assert!(!catalog.contains("Broken"));
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(matches!(
            CardCatalog::from_json_str("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = CardCatalog::load_json("/definitely/not/here/card.json").unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
        assert!(err.to_string().contains("card.json"));
    }

    #[test]
    fn test_closure_lookup() {
        let prism = Arc::new(Card::builder("Prism").type_tag("Hero").build());
        let lookup = |name: &str| (name == "Prism").then(|| Arc::clone(&prism));
        assert!(lookup.lookup("Prism").is_some());
        assert!(lookup.lookup("Kano").is_none());
    }
}
