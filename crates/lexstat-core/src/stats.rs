//! Per-paragraph metrics pipeline.
//!
//! Each paragraph is scored on its own: raw punctuation is counted first,
//! then the text is normalized and every word-level counter runs over the
//! normalized tokens, and only then are the readability formulas evaluated.
//! The Dale-Chall wordlist is the only shared input and is borrowed
//! read-only, so batches can fan out across threads.

use rayon::prelude::*;
use schemars::JsonSchema;
use serde::Serialize;

use crate::counters::{SyllableProfile, count_long_words};
use crate::dale_chall::{DaleChallWordlist, count_dale_chall};
use crate::readability;
use crate::text;

/// Syllable thresholds reported as `num_polysyllables_<n>`.
pub const POLYSYLLABLE_THRESHOLDS: [usize; 3] = [2, 3, 5];

/// Character-length thresholds reported as `num_long_<n>`.
pub const LONG_WORD_THRESHOLDS: [usize; 5] = [3, 5, 8, 10, 15];

/// Counters and readability scores for one paragraph.
///
/// Scores are `NaN` or infinite when the paragraph has no words or no
/// sentence terminators; they serialize to JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ParagraphStats {
    /// Commas in the raw paragraph.
    pub num_comma: usize,
    /// Sentence terminators (`.`, `?`, `!`) in the raw paragraph.
    pub num_sentences: usize,
    /// Word tokens after normalization.
    pub num_words: usize,
    /// Word characters after normalization.
    pub num_letters: usize,
    /// Heuristic syllable total over all words.
    pub num_syllables: usize,
    /// Words with exactly one syllable.
    pub num_monosyllables: usize,
    /// Words with two or more syllables.
    pub num_polysyllables_2: usize,
    /// Words with three or more syllables.
    pub num_polysyllables_3: usize,
    /// Words with five or more syllables.
    pub num_polysyllables_5: usize,
    /// Words of at least 3 characters.
    pub num_long_3: usize,
    /// Words of at least 5 characters.
    pub num_long_5: usize,
    /// Words of at least 8 characters.
    pub num_long_8: usize,
    /// Words of at least 10 characters.
    pub num_long_10: usize,
    /// Words of at least 15 characters.
    pub num_long_15: usize,
    /// Flesch Reading Ease.
    #[schemars(with = "Option<f64>")]
    pub flesch_reading_ease: f64,
    /// Flesch-Kincaid Grade Level.
    #[schemars(with = "Option<f64>")]
    pub flesch_grade_level: f64,
    /// Farr-Jenkins-Patterson modified Flesch score.
    #[schemars(with = "Option<f64>")]
    pub flesch_modified: f64,
    /// Words not on the Dale-Chall list.
    pub num_not_dale_chall: usize,
    /// Dale-Chall score, adjusted above 5% difficult words.
    #[schemars(with = "Option<f64>")]
    pub dale_chall_score: f64,
}

impl ParagraphStats {
    /// Score one paragraph.
    pub fn compute(paragraph: &str, wordlist: &DaleChallWordlist) -> Self {
        let num_comma = text::count_commas(paragraph);
        let num_sentences = text::count_sentence_terminators(paragraph);

        let normalized = text::normalize(paragraph);
        let syllables = SyllableProfile::scan(&normalized);

        let num_words = syllables.words();
        let num_syllables = syllables.total();
        let num_monosyllables = syllables.monosyllables();
        let num_not_dale_chall = count_dale_chall(&normalized, wordlist);

        let [poly_2, poly_3, poly_5] = POLYSYLLABLE_THRESHOLDS.map(|t| syllables.polysyllables(t));
        let [long_3, long_5, long_8, long_10, long_15] =
            LONG_WORD_THRESHOLDS.map(|t| count_long_words(&normalized, t));

        Self {
            num_comma,
            num_sentences,
            num_words,
            num_letters: text::count_letters(&normalized),
            num_syllables,
            num_monosyllables,
            num_polysyllables_2: poly_2,
            num_polysyllables_3: poly_3,
            num_polysyllables_5: poly_5,
            num_long_3: long_3,
            num_long_5: long_5,
            num_long_8: long_8,
            num_long_10: long_10,
            num_long_15: long_15,
            flesch_reading_ease: readability::flesch_reading_ease(
                num_words,
                num_sentences,
                num_syllables,
            ),
            flesch_grade_level: readability::flesch_grade_level(
                num_words,
                num_sentences,
                num_syllables,
            ),
            flesch_modified: readability::flesch_modified(
                num_words,
                num_sentences,
                num_monosyllables,
            ),
            num_not_dale_chall,
            dale_chall_score: readability::dale_chall_score(
                num_words,
                num_sentences,
                num_not_dale_chall,
            ),
        }
    }

    /// Whether every readability score is a finite number.
    pub const fn has_finite_scores(&self) -> bool {
        self.flesch_reading_ease.is_finite()
            && self.flesch_grade_level.is_finite()
            && self.flesch_modified.is_finite()
            && self.dale_chall_score.is_finite()
    }
}

/// How a batch of paragraphs is scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Execution {
    /// One paragraph after another on the calling thread.
    Sequential,
    /// Fan out across the rayon thread pool.
    #[default]
    Parallel,
}

impl Execution {
    /// Pick parallel or sequential from a config flag.
    pub const fn from_parallel(parallel: bool) -> Self {
        if parallel {
            Self::Parallel
        } else {
            Self::Sequential
        }
    }
}

/// Score every paragraph. Output order matches input order.
pub fn compute_batch<S>(
    paragraphs: &[S],
    wordlist: &DaleChallWordlist,
    execution: Execution,
) -> Vec<ParagraphStats>
where
    S: AsRef<str> + Sync,
{
    compute_batch_with_progress(paragraphs, wordlist, execution, || {})
}

/// Score every paragraph, calling `on_paragraph` after each one completes.
///
/// `on_paragraph` may run concurrently from several threads in
/// [`Execution::Parallel`] mode.
#[tracing::instrument(skip_all, fields(paragraphs = paragraphs.len(), ?execution))]
pub fn compute_batch_with_progress<S, F>(
    paragraphs: &[S],
    wordlist: &DaleChallWordlist,
    execution: Execution,
    on_paragraph: F,
) -> Vec<ParagraphStats>
where
    S: AsRef<str> + Sync,
    F: Fn() + Sync,
{
    let score = |p: &S| {
        let stats = ParagraphStats::compute(p.as_ref(), wordlist);
        on_paragraph();
        stats
    };

    let stats: Vec<ParagraphStats> = match execution {
        Execution::Sequential => paragraphs.iter().map(score).collect(),
        Execution::Parallel => paragraphs.par_iter().map(score).collect(),
    };

    let degenerate = stats.iter().filter(|s| !s.has_finite_scores()).count();
    if degenerate > 0 {
        tracing::debug!(degenerate, "paragraphs with undefined scores");
    }
    tracing::info!(paragraphs = stats.len(), "batch scored");
    stats
}
