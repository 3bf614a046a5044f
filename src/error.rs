//! Error types for the lookup pipeline, command parsing and startup configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while turning one save file into text. Always scoped to a single file;
/// the scanner logs and skips them.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The gzip magic matched but the payload did not inflate.
    #[error("{path} has a gzip header but is not a valid gzip stream: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("decode task for {path} failed: {source}")]
    Task {
        path: PathBuf,
        #[source]
        source: tokio::task::JoinError,
    },
}

/// Failures that abort a whole lookup. Callers report these as "data unavailable",
/// never as "player has nothing".
#[derive(Debug, Error)]
pub enum PokedexError {
    #[error("could not list save directory {path}: {source}")]
    SaveDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog query failed: {0}")]
    Query(#[from] sqlx::Error),
}

/// Bad command input. The `Display` text is sent back to the user verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("Please provide a player name.")]
    MissingPlayer,

    #[error("`{0}` is not a valid page number. Usage: `!pokedex <player> [page]`")]
    InvalidPage(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}
