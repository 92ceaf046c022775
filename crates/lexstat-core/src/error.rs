//! Error types for lexstat-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading the Dale-Chall wordlist.
///
/// Both variants are fatal: the wordlist is loaded once, before any
/// paragraph is scored.
#[derive(Error, Debug)]
pub enum WordlistError {
    /// The wordlist file is missing or unreadable.
    #[error("failed to read wordlist {path}: {source}")]
    Read {
        /// Path that was attempted.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The wordlist file contains no words.
    #[error("wordlist {path} contains no words")]
    Empty {
        /// Path of the empty wordlist.
        path: Utf8PathBuf,
    },
}

/// Result type alias using [`WordlistError`].
pub type WordlistResult<T> = Result<T, WordlistError>;
