//! Word-class counters over normalized text.
//!
//! Each counter splits already-normalized text on whitespace. The pipeline
//! scans syllables once per token through [`SyllableProfile`]; the free
//! functions exist for callers that only need one number.

use crate::syllables::count_syllables;
use crate::text::word_tokens;

/// Count tokens whose syllable count is exactly one.
pub fn count_monosyllables(normalized: &str) -> usize {
    SyllableProfile::scan(normalized).monosyllables()
}

/// Count tokens with at least `threshold` syllables.
pub fn count_polysyllables(normalized: &str, threshold: usize) -> usize {
    SyllableProfile::scan(normalized).polysyllables(threshold)
}

/// Count tokens whose character length is at least `threshold`.
pub fn count_long_words(normalized: &str, threshold: usize) -> usize {
    word_tokens(normalized)
        .filter(|w| w.chars().count() >= threshold)
        .count()
}

/// Per-token syllable counts for one normalized paragraph.
///
/// Built once per paragraph so the sum, monosyllable, and polysyllable
/// counts all come from a single scan of each token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyllableProfile {
    per_word: Vec<usize>,
}

impl SyllableProfile {
    /// Scan every token of `normalized`.
    pub fn scan(normalized: &str) -> Self {
        Self {
            per_word: word_tokens(normalized).map(count_syllables).collect(),
        }
    }

    /// Number of tokens scanned.
    pub const fn words(&self) -> usize {
        self.per_word.len()
    }

    /// Sum of syllables over all tokens.
    pub fn total(&self) -> usize {
        self.per_word.iter().sum()
    }

    /// Tokens with exactly one syllable.
    pub fn monosyllables(&self) -> usize {
        self.per_word.iter().filter(|&&n| n == 1).count()
    }

    /// Tokens with at least `threshold` syllables.
    pub fn polysyllables(&self, threshold: usize) -> usize {
        self.per_word.iter().filter(|&&n| n >= threshold).count()
    }

    /// Tokens the heuristic scored at zero syllables.
    pub fn silent(&self) -> usize {
        self.per_word.iter().filter(|&&n| n == 0).count()
    }
}
