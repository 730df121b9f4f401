//! Card system: records, entities, formats, and catalog.
//!
//! ## Key Types
//!
//! - `CardRecord`: One raw element of the catalog JSON dump
//! - `Card`: Immutable card entity, shared as `Arc<Card>`
//! - `Format`: Play format (CC, Blitz, Silver Age)
//! - `CardLookup`: Name-to-card resolution used by the deck codec
//! - `CardCatalog`: In-memory catalog keyed by name

pub mod card;
pub mod catalog;
pub mod format;
pub mod record;

pub use card::{Card, CardBuilder, StatValue, Tags, HERO_TYPE};
pub use catalog::{CardCatalog, CardLookup};
pub use format::{Format, Legalities, ParseFormatError};
pub use record::{CardRecord, PrintingRecord, RawStat};
