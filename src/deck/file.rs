//! Deck files on disk.
//!
//! Each deck is stored as `<sanitized name>.txt` in a deck directory. The
//! sanitization is lossy, so loading by name must apply the same rule to find
//! the file again.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cards::CardLookup;
use crate::error::DeckFileError;

use super::codec::{self, DecodeReport};
use super::model::Deck;

/// Extension used for deck files.
pub const DECK_FILE_EXTENSION: &str = "txt";

/// Strip every character that is not alphanumeric, a space, a hyphen or an
/// underscore.
///
/// ```
/// use fab_deck::deck::sanitize_deck_name;
///
/// assert_eq!(sanitize_deck_name("Calling: Hong Kong 1st"), "Calling Hong Kong 1st");
/// assert_eq!(sanitize_deck_name("a/b\\c?"), "abc");
/// ```
#[must_use]
pub fn sanitize_deck_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect()
}

/// Path of the file a deck named `name` is stored in.
pub fn deck_file_path(dir: impl AsRef<Path>, name: &str) -> Result<PathBuf, DeckFileError> {
    let stem = sanitize_deck_name(name);
    if stem.trim().is_empty() {
        return Err(DeckFileError::EmptyName(name.to_string()));
    }
    Ok(dir
        .as_ref()
        .join(format!("{stem}.{DECK_FILE_EXTENSION}")))
}

/// Write a deck to its file in `dir`, returning the path written.
pub fn save_deck(dir: impl AsRef<Path>, deck: &Deck) -> Result<PathBuf, DeckFileError> {
    let path = deck_file_path(dir, deck.name())?;
    std::fs::write(&path, codec::encode(deck)).map_err(|source| DeckFileError::Write {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), "saved deck");
    Ok(path)
}

/// Read and decode a deck file.
pub fn read_deck<L>(path: impl AsRef<Path>, lookup: &L) -> Result<(Deck, DecodeReport), DeckFileError>
where
    L: CardLookup + ?Sized,
{
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| DeckFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(codec::decode(&text, lookup))
}

/// Load the deck named `name` from `dir`.
pub fn load_deck<L>(
    dir: impl AsRef<Path>,
    name: &str,
    lookup: &L,
) -> Result<(Deck, DecodeReport), DeckFileError>
where
    L: CardLookup + ?Sized,
{
    let path = deck_file_path(dir, name)?;
    read_deck(path, lookup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_allowed_characters() {
        assert_eq!(sanitize_deck_name("My_Deck-2 v3"), "My_Deck-2 v3");
        assert_eq!(sanitize_deck_name("Prism <Blitz> | \"final\" *"), "Prism Blitz  final ");
        assert_eq!(sanitize_deck_name("Kanō.txt"), "Kanōtxt");
    }

    #[test]
    fn test_deck_file_path() {
        let path = deck_file_path("/decks", "Calling: Hong Kong 1st").unwrap();
        assert_eq!(path, PathBuf::from("/decks/Calling Hong Kong 1st.txt"));
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            deck_file_path("/decks", "???"),
            Err(DeckFileError::EmptyName(_))
        ));
        assert!(deck_file_path("/decks", " : ").is_err());
    }
}
