//! The deck model.
//!
//! A `Deck` is a hero slot plus a pool of non-hero cards with quantities.
//! Mutators never fail: over-limit quantities, missing heroes and illegal
//! cards are all representable and only reported by the validator.
//!
//! ## Invariants
//!
//! - The card pool never contains a hero card.
//! - Every pool quantity is at least 1; an entry reaching 0 is removed.
//! - At most one hero; setting a hero replaces the previous one.

use std::sync::Arc;

use im::OrdMap;
use tracing::trace;

use crate::cards::{Card, Format};
use crate::config::FormatRules;

use super::validator::{self, LegalityReport};

/// Name given to decks that have not been named yet.
pub const DEFAULT_DECK_NAME: &str = "New Deck";

/// A card and how many copies of it the deck holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckEntry {
    pub card: Arc<Card>,
    pub quantity: u32,
}

impl DeckEntry {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.card.name
    }
}

/// What `Deck::add_card` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// The card was a hero and now occupies the hero slot.
    HeroSet { name: String },
    /// Copies were added to the card pool.
    Added { name: String, quantity: u32 },
    /// Nothing changed (zero copies of a non-hero card).
    Skipped { name: String },
}

impl std::fmt::Display for AddOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddOutcome::HeroSet { name } => write!(f, "Hero set to {name}"),
            AddOutcome::Added { name, quantity } => write!(f, "Added {quantity}x {name}"),
            AddOutcome::Skipped { name } => write!(f, "Skipped {name}"),
        }
    }
}

/// What `Deck::remove_one` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// One copy removed, `remaining` copies left.
    Decremented { remaining: u32 },
    /// The last copy was removed and the entry deleted.
    Removed,
    /// The name was the hero; the hero slot is now empty.
    HeroCleared,
    /// The name matched nothing.
    NotFound,
}

/// A deck under construction.
///
/// Cloning is cheap: the card pool is a persistent map and cards are shared.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use fab_deck::cards::Card;
/// use fab_deck::deck::Deck;
///
/// let mut deck = Deck::default();
/// let hero = Arc::new(Card::builder("Prism").type_tag("Hero").build());
/// let snatch = Arc::new(Card::builder("Snatch").build());
///
/// assert_eq!(deck.add_card(hero, 1).to_string(), "Hero set to Prism");
/// assert_eq!(deck.add_card(snatch, 3).to_string(), "Added 3x Snatch");
/// assert_eq!(deck.total_cards(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    name: String,
    format: Format,
    hero: Option<Arc<Card>>,
    entries: OrdMap<String, DeckEntry>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(DEFAULT_DECK_NAME, Format::default())
    }
}

impl Deck {
    /// Create an empty deck.
    pub fn new(name: impl Into<String>, format: Format) -> Self {
        Self {
            name: name.into(),
            format,
            hero: None,
            entries: OrdMap::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn format(&self) -> Format {
        self.format
    }

    pub fn set_format(&mut self, format: Format) {
        self.format = format;
    }

    #[must_use]
    pub fn hero(&self) -> Option<&Arc<Card>> {
        self.hero.as_ref()
    }

    /// Put a card in the hero slot, replacing any previous hero.
    ///
    /// No type check happens here; `add_card` does the routing.
    pub fn set_hero(&mut self, card: Arc<Card>) {
        self.hero = Some(card);
    }

    /// Add copies of a card.
    ///
    /// Heroes go to the hero slot and `quantity` is ignored. Other cards are
    /// added to the pool, merging with an existing entry of the same name.
    /// No copy limit is enforced here.
    pub fn add_card(&mut self, card: Arc<Card>, quantity: u32) -> AddOutcome {
        let name = card.name.clone();

        if card.is_hero() {
            trace!(%name, "routing hero card to hero slot");
            self.set_hero(card);
            return AddOutcome::HeroSet { name };
        }

        if quantity == 0 {
            return AddOutcome::Skipped { name };
        }

        match self.entries.get_mut(&name) {
            Some(entry) => entry.quantity = entry.quantity.saturating_add(quantity),
            None => {
                self.entries
                    .insert(name.clone(), DeckEntry { card, quantity });
            }
        }
        AddOutcome::Added { name, quantity }
    }

    /// Remove one copy of the named card, or clear the hero if the name is
    /// the hero's.
    pub fn remove_one(&mut self, card_name: &str) -> RemoveOutcome {
        match self.entries.get(card_name).map(|e| e.quantity) {
            Some(quantity) if quantity > 1 => {
                if let Some(entry) = self.entries.get_mut(card_name) {
                    entry.quantity = quantity - 1;
                }
                RemoveOutcome::Decremented {
                    remaining: quantity - 1,
                }
            }
            Some(_) => {
                self.entries.remove(card_name);
                RemoveOutcome::Removed
            }
            None if self.hero.as_ref().is_some_and(|h| h.name == card_name) => {
                self.hero = None;
                RemoveOutcome::HeroCleared
            }
            None => RemoveOutcome::NotFound,
        }
    }

    /// Empty the card pool and the hero slot. Name and format are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hero = None;
    }

    /// Pool entries in name order.
    pub fn entries(&self) -> impl Iterator<Item = &DeckEntry> {
        self.entries.values()
    }

    /// Copies of the named card in the pool (0 if absent).
    #[must_use]
    pub fn quantity_of(&self, card_name: &str) -> u32 {
        self.entries.get(card_name).map_or(0, |e| e.quantity)
    }

    /// Total non-hero cards, saturating at `u32::MAX`.
    #[must_use]
    pub fn total_cards(&self) -> u32 {
        self.entries
            .values()
            .fold(0u32, |total, e| total.saturating_add(e.quantity))
    }

    /// Number of distinct non-hero cards.
    #[must_use]
    pub fn unique_cards(&self) -> usize {
        self.entries.len()
    }

    /// No hero and no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hero.is_none() && self.entries.is_empty()
    }

    /// Check the deck against the default format rules.
    ///
    /// Returns whether the deck is legal and the violation messages in order.
    #[must_use]
    pub fn validate_legality(&self) -> (bool, Vec<String>) {
        self.check(&FormatRules::default()).into()
    }

    /// Check the deck against a custom rules table.
    #[must_use]
    pub fn check(&self, rules: &FormatRules) -> LegalityReport {
        validator::validate(self, rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str) -> Arc<Card> {
        Arc::new(Card::builder(name).legal_everywhere().build())
    }

    fn hero(name: &str) -> Arc<Card> {
        Arc::new(Card::builder(name).type_text("Illusionist Hero").build())
    }

    #[test]
    fn test_new_deck_is_empty() {
        let deck = Deck::default();
        assert_eq!(deck.name(), DEFAULT_DECK_NAME);
        assert_eq!(deck.format(), Format::CC);
        assert!(deck.is_empty());
        assert_eq!(deck.total_cards(), 0);
    }

    #[test]
    fn test_add_merges_quantities() {
        let mut deck = Deck::default();
        let snatch = card("Snatch");

        assert_eq!(
            deck.add_card(Arc::clone(&snatch), 2),
            AddOutcome::Added {
                name: "Snatch".to_string(),
                quantity: 2
            }
        );
        deck.add_card(snatch, 1);

        assert_eq!(deck.quantity_of("Snatch"), 3);
        assert_eq!(deck.unique_cards(), 1);
    }

    #[test]
    fn test_add_has_no_upper_bound() {
        let mut deck = Deck::default();
        deck.add_card(card("Snatch"), 10);
        assert_eq!(deck.quantity_of("Snatch"), 10);
    }

    #[test]
    fn test_hero_routes_to_slot() {
        let mut deck = Deck::default();
        let outcome = deck.add_card(hero("Prism"), 3);

        assert_eq!(outcome.to_string(), "Hero set to Prism");
        assert_eq!(deck.hero().map(|h| h.name.as_str()), Some("Prism"));
        assert_eq!(deck.unique_cards(), 0);
        assert_eq!(deck.total_cards(), 0);
    }

    #[test]
    fn test_new_hero_replaces_old() {
        let mut deck = Deck::default();
        deck.add_card(hero("Prism"), 1);
        deck.add_card(hero("Kano"), 1);
        assert_eq!(deck.hero().map(|h| h.name.as_str()), Some("Kano"));
    }

    #[test]
    fn test_set_hero_does_not_check_type() {
        let mut deck = Deck::default();
        deck.set_hero(card("Snatch"));
        assert_eq!(deck.hero().map(|h| h.name.as_str()), Some("Snatch"));
    }

    #[test]
    fn test_zero_quantity_is_skipped() {
        let mut deck = Deck::default();
        let outcome = deck.add_card(card("Snatch"), 0);
        assert!(matches!(outcome, AddOutcome::Skipped { .. }));
        assert!(deck.is_empty());
    }

    #[test]
    fn test_remove_one_decrements_then_removes() {
        let mut deck = Deck::default();
        deck.add_card(card("Snatch"), 2);

        assert_eq!(
            deck.remove_one("Snatch"),
            RemoveOutcome::Decremented { remaining: 1 }
        );
        assert_eq!(deck.remove_one("Snatch"), RemoveOutcome::Removed);
        assert_eq!(deck.quantity_of("Snatch"), 0);
        assert_eq!(deck.entries().count(), 0);
        assert_eq!(deck.remove_one("Snatch"), RemoveOutcome::NotFound);
    }

    #[test]
    fn test_remove_hero_by_name() {
        let mut deck = Deck::default();
        deck.add_card(hero("Prism"), 1);
        assert_eq!(deck.remove_one("Prism"), RemoveOutcome::HeroCleared);
        assert!(deck.hero().is_none());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut deck = Deck::default();
        deck.add_card(hero("Prism"), 1);
        deck.add_card(card("Snatch"), 1);
        let before = deck.clone();

        assert_eq!(deck.remove_one("Kano"), RemoveOutcome::NotFound);
        assert_eq!(deck, before);
    }

    #[test]
    fn test_clear_keeps_name_and_format() {
        let mut deck = Deck::new("Mine", Format::Blitz);
        deck.add_card(hero("Prism"), 1);
        deck.add_card(card("Snatch"), 3);
        deck.clear();

        assert!(deck.is_empty());
        assert_eq!(deck.name(), "Mine");
        assert_eq!(deck.format(), Format::Blitz);
    }

    #[test]
    fn test_entries_in_name_order() {
        let mut deck = Deck::default();
        deck.add_card(card("Zephyr"), 1);
        deck.add_card(card("Amulet"), 1);
        deck.add_card(card("Mirror"), 1);
        let names: Vec<_> = deck.entries().map(DeckEntry::name).collect();
        assert_eq!(names, ["Amulet", "Mirror", "Zephyr"]);
    }

    #[test]
    fn test_total_saturates() {
        let mut deck = Deck::default();
        deck.add_card(card("A"), u32::MAX);
        deck.add_card(card("B"), u32::MAX);
        deck.add_card(card("A"), 1);

        assert_eq!(deck.quantity_of("A"), u32::MAX);
        assert_eq!(deck.total_cards(), u32::MAX);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut deck = Deck::default();
        deck.add_card(card("Snatch"), 1);
        let snapshot = deck.clone();
        deck.add_card(card("Snatch"), 1);

        assert_eq!(snapshot.quantity_of("Snatch"), 1);
        assert_eq!(deck.quantity_of("Snatch"), 2);
    }
}
