//! # fab-deck
//!
//! Deck model, legality validator and deck-list codec for Flesh and Blood.
//!
//! ## Design Principles
//!
//! 1. **Mutation Never Fails**: Adding and removing cards always succeeds.
//!    Over-limit or illegal decks are representable; the validator reports
//!    what is wrong instead of the model refusing it.
//!
//! 2. **Injected Catalog**: The core never reaches for a database. Every
//!    operation that needs cards takes a `CardLookup`, which can be the
//!    in-memory `CardCatalog` or a plain closure.
//!
//! 3. **Tolerant Import**: Deck lists come from external tools. Decoding skips
//!    what it cannot read and reports unresolved names.
//!
//! ## Modules
//!
//! - `cards`: Catalog records, card entities, formats, lookup
//! - `deck`: Deck model, validator, deck-list codec, deck files
//! - `config`: Per-format copy limits and size rules
//! - `error`: Errors for catalog, rules and deck file I/O

#![forbid(unsafe_code)]

pub mod cards;
pub mod config;
pub mod deck;
pub mod error;

// Re-export commonly used types
pub use crate::cards::{Card, CardCatalog, CardLookup, CardRecord, Format, StatValue};

pub use crate::config::{FormatRule, FormatRules, SizeRule};

pub use crate::deck::{
    decode, decode_into, encode, sanitize_deck_name,
    AddOutcome, Deck, DeckEntry, DeckList, DecodeReport, LegalityReport, RemoveOutcome, Violation,
};

pub use crate::error::{CatalogError, DeckFileError, RulesError};
