//! Core library for lexstat.
//!
//! Readability and lexical-complexity statistics for text paragraphs:
//! punctuation, word, letter, and syllable counts, difficult-word classes,
//! and the Flesch, Flesch-Kincaid, modified Flesch, and Dale-Chall scores.
//!
//! # Modules
//!
//! - [`syllables`] - Heuristic syllable scanner
//! - [`counters`] - Monosyllable, polysyllable, and long-word counters
//! - [`dale_chall`] - Dale-Chall wordlist and difficult-word counter
//! - [`readability`] - Readability formulas
//! - [`stats`] - Per-paragraph metrics pipeline
//! - [`summary`] - Batch roll-up
//! - [`text`] - Normalization and paragraph splitting
//! - [`markdown`] - Prose extraction from markdown
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use lexstat_core::{DaleChallWordlist, Execution, compute_batch};
//!
//! let wordlist: DaleChallWordlist = ["the", "cat", "sat", "on", "mat"].into_iter().collect();
//! let stats = compute_batch(&["The cat sat on the mat."], &wordlist, Execution::Sequential);
//!
//! assert_eq!(stats[0].num_words, 6);
//! assert_eq!(stats[0].num_not_dale_chall, 0);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod counters;
pub mod dale_chall;
pub mod error;
pub mod markdown;
pub mod readability;
pub mod stats;
pub mod summary;
pub mod syllables;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use dale_chall::DaleChallWordlist;
pub use error::{ConfigError, ConfigResult, WordlistError, WordlistResult};
pub use stats::{Execution, ParagraphStats, compute_batch, compute_batch_with_progress};
pub use summary::BatchSummary;
pub use text::ParagraphSplit;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
