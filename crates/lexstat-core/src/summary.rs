//! Batch-level roll-up of paragraph statistics.

use schemars::JsonSchema;
use serde::Serialize;

use crate::stats::ParagraphStats;

/// Totals and mean scores over a batch of paragraphs.
///
/// Means skip paragraphs whose score is NaN or infinite; a mean is `None`
/// when no paragraph had a finite value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
pub struct BatchSummary {
    /// Paragraphs scored.
    pub paragraphs: usize,
    /// Paragraphs with at least one undefined score.
    pub undefined_scores: usize,
    /// Words across all paragraphs.
    pub total_words: usize,
    /// Sentence terminators across all paragraphs.
    pub total_sentences: usize,
    /// Syllables across all paragraphs.
    pub total_syllables: usize,
    /// Words not on the Dale-Chall list, across all paragraphs.
    pub total_not_dale_chall: usize,
    /// Mean Flesch Reading Ease.
    pub mean_flesch_reading_ease: Option<f64>,
    /// Mean Flesch-Kincaid Grade Level.
    pub mean_flesch_grade_level: Option<f64>,
    /// Mean modified Flesch score.
    pub mean_flesch_modified: Option<f64>,
    /// Mean Dale-Chall score.
    pub mean_dale_chall_score: Option<f64>,
}

impl BatchSummary {
    /// Roll up a slice of paragraph statistics.
    pub fn from_stats(stats: &[ParagraphStats]) -> Self {
        Self {
            paragraphs: stats.len(),
            undefined_scores: stats.iter().filter(|s| !s.has_finite_scores()).count(),
            total_words: stats.iter().map(|s| s.num_words).sum(),
            total_sentences: stats.iter().map(|s| s.num_sentences).sum(),
            total_syllables: stats.iter().map(|s| s.num_syllables).sum(),
            total_not_dale_chall: stats.iter().map(|s| s.num_not_dale_chall).sum(),
            mean_flesch_reading_ease: finite_mean(stats.iter().map(|s| s.flesch_reading_ease)),
            mean_flesch_grade_level: finite_mean(stats.iter().map(|s| s.flesch_grade_level)),
            mean_flesch_modified: finite_mean(stats.iter().map(|s| s.flesch_modified)),
            mean_dale_chall_score: finite_mean(stats.iter().map(|s| s.dale_chall_score)),
        }
    }
}

fn finite_mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dale_chall::DaleChallWordlist;

    #[test]
    fn empty_batch() {
        let summary = BatchSummary::from_stats(&[]);
        assert_eq!(summary.paragraphs, 0);
        assert!(summary.mean_flesch_grade_level.is_none());
    }

    #[test]
    fn undefined_scores_are_skipped_in_means() {
        let list: DaleChallWordlist = ["the", "cat", "sat"].into_iter().collect();
        let defined = ParagraphStats::compute("The cat sat.", &list);
        let undefined = ParagraphStats::compute("", &list);
        let summary = BatchSummary::from_stats(&[defined.clone(), undefined]);

        assert_eq!(summary.paragraphs, 2);
        assert_eq!(summary.undefined_scores, 1);
        assert_eq!(summary.total_words, 3);
        assert_eq!(summary.total_sentences, 1);
        assert_eq!(
            summary.mean_flesch_reading_ease,
            Some(defined.flesch_reading_ease)
        );
        assert_eq!(summary.mean_dale_chall_score, Some(defined.dale_chall_score));
    }

    #[test]
    fn means_average_finite_values() {
        assert_eq!(finite_mean([1.0, 3.0].into_iter()), Some(2.0));
        assert_eq!(finite_mean([f64::NAN, f64::INFINITY].into_iter()), None);
        assert_eq!(finite_mean([f64::NAN, 4.0].into_iter()), Some(4.0));
    }
}
