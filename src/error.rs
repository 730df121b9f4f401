//! Errors raised at the I/O boundary.
//!
//! The deck core (model, validator, codec) never fails; these types only
//! cover loading the catalog and reading or writing deck files.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load the card catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure to read or write a deck file.
#[derive(Debug, Error)]
pub enum DeckFileError {
    #[error("deck name {0:?} has no usable filename characters")]
    EmptyName(String),

    #[error("failed to read deck file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write deck file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure to load a format rules file.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("failed to read rules {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rules: {0}")]
    Parse(#[from] serde_json::Error),
}
