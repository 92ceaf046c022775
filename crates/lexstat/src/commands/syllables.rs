//! Syllables command: inspect the heuristic scanner word by word.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use lexstat_core::{syllables, text};

/// Arguments for the `syllables` subcommand.
#[derive(Args, Debug)]
pub struct SyllablesArgs {
    /// Words to scan. Each is normalized first, so hyphenated input splits.
    #[arg(required = true)]
    pub words: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct WordSyllables {
    word: String,
    syllables: usize,
}

fn scan(words: &[String]) -> Vec<WordSyllables> {
    words
        .iter()
        .flat_map(|raw| {
            let normalized = text::normalize(raw);
            text::word_tokens(&normalized)
                .map(|word| WordSyllables {
                    word: word.to_string(),
                    syllables: syllables::count_syllables(word),
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Print the syllable count of each word.
#[instrument(name = "cmd_syllables", skip_all, fields(words = args.words.len()))]
pub fn cmd_syllables(args: SyllablesArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(words = ?args.words, "executing syllables command");

    let counts = scan(&args.words);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }

    for entry in &counts {
        if entry.syllables == 0 {
            println!("{} {}", entry.word, entry.syllables.yellow());
        } else {
            println!("{} {}", entry.word, entry.syllables);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_normalizes_before_counting() {
        let counts = scan(&["Homomorphism!".to_string(), "test-sentence".to_string()]);
        assert_eq!(
            counts,
            vec![
                WordSyllables {
                    word: "homomorphism".to_string(),
                    syllables: 4
                },
                WordSyllables {
                    word: "test".to_string(),
                    syllables: 1
                },
                WordSyllables {
                    word: "sentence".to_string(),
                    syllables: 3
                },
            ]
        );
    }

    #[test]
    fn digits_only_word_yields_nothing() {
        assert!(scan(&["2024".to_string()]).is_empty());
    }

    #[test]
    fn cmd_syllables_succeeds() {
        let args = SyllablesArgs {
            words: vec!["tree".to_string()],
        };
        assert!(cmd_syllables(args, true).is_ok());
    }
}
