//! Text processing utilities.
//!
//! Normalization, raw punctuation counting, word tokenization, and paragraph
//! splitting for use by the metrics pipeline.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Regex for decimal digits (any script).
static DIGIT_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").expect("valid regex"));

/// Regex for anything that is neither a word character nor whitespace.
///
/// Word characters are letters, numbers of every kind (so `²` and `½` stay),
/// and `_`. Combining marks are not word characters. Whitespace includes the
/// `\x1c`-`\x1f` separators.
static PUNCTUATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_\s\x1c-\x1f]").expect("valid regex"));

/// Regex for runs of whitespace, information separators included.
static WHITESPACE_RUN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x1c-\x1f]+").expect("valid regex"));

/// Regex for a single word-constituent character.
static WORD_CHAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}_]").expect("valid regex"));

/// How an input document is cut into paragraphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ParagraphSplit {
    /// Every non-blank line is one paragraph.
    Lines,
    /// Paragraphs are separated by one or more blank lines.
    #[default]
    BlankLines,
}

impl ParagraphSplit {
    /// Returns the split mode as a kebab-case string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lines => "lines",
            Self::BlankLines => "blank-lines",
        }
    }
}

impl std::fmt::Display for ParagraphSplit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize a paragraph for word-level scanning.
///
/// Lowercases, removes digits, turns hyphens into spaces, drops every
/// character that is neither a word character nor whitespace, then collapses
/// whitespace runs to a single space. Leading and trailing spaces survive as
/// one space each. Applying it twice yields the same string.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let no_digits = DIGIT_PATTERN.replace_all(&lowered, "");
    let dehyphenated = no_digits.replace('-', " ");
    let no_punct = PUNCTUATION_PATTERN.replace_all(&dehyphenated, "");
    WHITESPACE_RUN_PATTERN
        .replace_all(&no_punct, " ")
        .into_owned()
}

/// Count commas in raw (unnormalized) text.
pub fn count_commas(raw: &str) -> usize {
    raw.chars().filter(|&c| c == ',').count()
}

/// Count sentence terminators (`.`, `?`, `!`) in raw text.
///
/// Every terminator character counts, so `"?!?!"` contributes four.
pub fn count_sentence_terminators(raw: &str) -> usize {
    raw.chars().filter(|&c| is_sentence_terminator(c)).count()
}

/// Count word-constituent characters across a normalized string.
pub fn count_letters(normalized: &str) -> usize {
    WORD_CHAR_PATTERN.find_iter(normalized).count()
}

/// Split normalized text into word tokens. Tokens are never empty.
pub fn word_tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}

/// Split a document into paragraphs.
///
/// Whitespace-only paragraphs are dropped; surrounding whitespace is trimmed.
pub fn split_paragraphs(text: &str, mode: ParagraphSplit) -> Vec<String> {
    match mode {
        ParagraphSplit::Lines => text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect(),
        ParagraphSplit::BlankLines => {
            let mut paragraphs = Vec::new();
            let mut current: Vec<&str> = Vec::new();
            for line in text.lines() {
                if line.trim().is_empty() {
                    if !current.is_empty() {
                        paragraphs.push(current.join("\n"));
                        current.clear();
                    }
                } else {
                    current.push(line.trim());
                }
            }
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
            }
            paragraphs
        }
    }
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}
