//! Deck-list text format.
//!
//! ```text
//! Name: Prism Blitz
//! Hero: Prism
//! Format: Blitz
//!
//! Deck cards
//! 2x Enigma Chimera (red)
//! 1x Herald of Judgment (yellow)
//! ```
//!
//! Encoding writes entries in name order and decorates each line with the
//! card's pitch colour. Decoding is tolerant: deck lists come from external
//! tools, so blank lines, boilerplate and anything that does not look like
//! `<qty>[x] <name>` are skipped, the colour suffix is discarded, and names
//! the catalog cannot resolve are reported instead of failing the decode.
//! Header lines (`Name:`, `Hero:`, `Format:`) are never treated as
//! boilerplate, so any deck or hero name survives a round trip.

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::cards::{CardLookup, Format};

use super::model::{Deck, DEFAULT_DECK_NAME};

/// Hero line value for decks without a hero.
pub const NO_HERO: &str = "No Hero";

/// Header written above the card lines.
pub const CARDS_HEADER: &str = "Deck cards";

/// Lines containing any of these are exporter boilerplate.
const BOILERPLATE: [&str; 2] = ["Made with", "See the full"];

/// `<qty>[x] <name> [(suffix)]`
fn card_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)x?\s+([^(]+)").expect("card line pattern is valid"))
}

/// Names the decoder could not resolve.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodeReport {
    /// Unresolved card names, first occurrence order, no duplicates.
    pub missing: Vec<String>,
}

impl DecodeReport {
    /// Every card line resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    fn note_missing(&mut self, name: &str) {
        if !self.missing.iter().any(|m| m == name) {
            self.missing.push(name.to_string());
        }
    }
}

/// Deck-list rendering of a deck, usable with `format!` and `write!`.
#[derive(Clone, Copy, Debug)]
pub struct DeckList<'a>(pub &'a Deck);

impl std::fmt::Display for DeckList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let deck = self.0;
        let hero = deck.hero().map_or(NO_HERO, |h| h.name.as_str());

        writeln!(f, "Name: {}", deck.name())?;
        writeln!(f, "Hero: {hero}")?;
        writeln!(f, "Format: {}", deck.format())?;
        writeln!(f)?;
        writeln!(f, "{CARDS_HEADER}")?;
        for entry in deck.entries() {
            writeln!(
                f,
                "{}x {}{}",
                entry.quantity,
                entry.card.name,
                entry.card.pitch_tag()
            )?;
        }
        Ok(())
    }
}

/// Render a deck as deck-list text.
#[must_use]
pub fn encode(deck: &Deck) -> String {
    DeckList(deck).to_string()
}

/// Decode deck-list text into `deck`, replacing its name, hero and cards.
///
/// The format is kept unless the text has a recognised `Format:` line.
pub fn decode_into<L>(deck: &mut Deck, text: &str, lookup: &L) -> DecodeReport
where
    L: CardLookup + ?Sized,
{
    deck.clear();
    deck.set_name(DEFAULT_DECK_NAME);
    let mut report = DecodeReport::default();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(name) = line.strip_prefix("Name:") {
            deck.set_name(name.trim());
        } else if let Some(hero) = line.strip_prefix("Hero:") {
            let hero = hero.trim();
            if hero.is_empty() || hero == NO_HERO {
                continue;
            }
            match lookup.lookup(hero) {
                Some(card) => deck.set_hero(card),
                None => debug!(name = hero, "hero not in catalog, dropped"),
            }
        } else if let Some(format) = line.strip_prefix("Format:") {
            match format.parse::<Format>() {
                Ok(format) => deck.set_format(format),
                Err(err) => warn!(%err, "ignoring format line"),
            }
        } else if BOILERPLATE.iter().any(|b| line.contains(b)) {
            continue;
        } else if let Some((quantity, name)) = parse_card_line(line) {
            match lookup.lookup(name) {
                Some(card) => {
                    deck.add_card(card, quantity);
                }
                None => report.note_missing(name),
            }
        } else {
            debug!(line, "skipping unrecognised line");
        }
    }

    if !report.is_complete() {
        debug!(missing = report.missing.len(), "deck list has unresolved cards");
    }
    report
}

/// Decode deck-list text into a new deck.
pub fn decode<L>(text: &str, lookup: &L) -> (Deck, DecodeReport)
where
    L: CardLookup + ?Sized,
{
    let mut deck = Deck::default();
    let report = decode_into(&mut deck, text, lookup);
    (deck, report)
}

/// Split a card line into quantity and bare name.
fn parse_card_line(line: &str) -> Option<(u32, &str)> {
    let caps = card_line().captures(line)?;
    let quantity: u32 = caps.get(1)?.as_str().parse().ok()?;
    let name = caps.get(2)?.as_str().trim();
    if quantity == 0 || name.is_empty() {
        return None;
    }
    Some((quantity, name))
}
