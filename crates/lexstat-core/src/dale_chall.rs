//! Dale-Chall familiar-word list and the difficult-word counter.
//!
//! The list is read once from a plain-text file (one word per line) into an
//! immutable set and then shared by reference across every paragraph.

use std::collections::HashSet;
use std::io::{BufRead, BufReader, Read};

use camino::Utf8Path;

use crate::error::{WordlistError, WordlistResult};
use crate::text::word_tokens;

/// Immutable set of lowercase familiar words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaleChallWordlist {
    words: HashSet<String>,
}

impl DaleChallWordlist {
    /// Load the wordlist from a file.
    ///
    /// The file is opened, read to the end, and closed before this returns.
    #[tracing::instrument(skip_all, fields(path = %path))]
    pub fn from_path(path: &Utf8Path) -> WordlistResult<Self> {
        let read_error = |source| WordlistError::Read {
            path: path.to_path_buf(),
            source,
        };
        let file = std::fs::File::open(path.as_std_path()).map_err(read_error)?;
        let list = Self::from_reader(file).map_err(read_error)?;

        if list.is_empty() {
            return Err(WordlistError::Empty {
                path: path.to_path_buf(),
            });
        }
        tracing::debug!(words = list.len(), "wordlist loaded");
        Ok(list)
    }

    /// Read a wordlist from any reader, one word per line.
    ///
    /// Lines are trimmed and lowercased; blank lines are skipped.
    pub fn from_reader<R: Read>(reader: R) -> std::io::Result<Self> {
        let mut words = HashSet::new();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.insert(word.to_lowercase());
            }
        }
        Ok(Self { words })
    }

    /// Whether `word` is on the list. Matching is exact.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words on the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for DaleChallWordlist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }
}

/// Count tokens of normalized text that are not on the wordlist.
pub fn count_dale_chall(normalized: &str, wordlist: &DaleChallWordlist) -> usize {
    word_tokens(normalized)
        .filter(|w| !wordlist.contains(w))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::normalize;
    use camino::Utf8PathBuf;
    use std::fs;
    use tempfile::TempDir;

    fn sample() -> DaleChallWordlist {
        ["the", "cat", "sat", "on", "mat"].into_iter().collect()
    }

    #[test]
    fn known_words_are_not_difficult() {
        let normalized = normalize("The cat sat on the mat.");
        assert_eq!(count_dale_chall(&normalized, &sample()), 0);
    }

    #[test]
    fn unknown_words_count_once_each() {
        let normalized = normalize("The cat contemplated the ontological mat.");
        assert_eq!(count_dale_chall(&normalized, &sample()), 2);
    }

    #[test]
    fn case_folding_matches() {
        let list = sample();
        assert!(list.contains("the"));
        assert!(!list.contains("The"));
        assert_eq!(count_dale_chall(&normalize("THE"), &list), 0);
    }

    #[test]
    fn reader_trims_lowercases_and_skips_blanks() {
        let input = "The\n  cat  \n\nSAT\r\n";
        let list = DaleChallWordlist::from_reader(input.as_bytes()).unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.contains("the"));
        assert!(list.contains("cat"));
        assert!(list.contains("sat"));
    }

    #[test]
    fn from_path_loads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dale-chall.txt");
        fs::write(&path, "a\nable\nabout\n").unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();

        let list = DaleChallWordlist::from_path(&path).unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.contains("able"));
    }

    #[test]
    fn missing_file_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("missing.txt")).unwrap();
        let err = DaleChallWordlist::from_path(&path).unwrap_err();
        assert!(matches!(err, WordlistError::Read { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn empty_file_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.txt");
        fs::write(&path, "\n\n").unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();
        let err = DaleChallWordlist::from_path(&path).unwrap_err();
        assert!(matches!(err, WordlistError::Empty { .. }));
    }
}
