//! Deck building: model, legality validation, and deck-list files.
//!
//! ## Key Types
//!
//! - `Deck`: Hero slot plus a name-keyed pool of cards with quantities
//! - `LegalityReport`: Ordered rule violations for a deck
//! - `DecodeReport`: Card names a deck list referenced but the catalog lacked

pub mod codec;
pub mod file;
pub mod model;
pub mod validator;

pub use codec::{decode, decode_into, encode, DeckList, DecodeReport};
pub use file::{deck_file_path, load_deck, read_deck, sanitize_deck_name, save_deck};
pub use model::{AddOutcome, Deck, DeckEntry, RemoveOutcome, DEFAULT_DECK_NAME};
pub use validator::{validate, LegalityReport, Violation};
