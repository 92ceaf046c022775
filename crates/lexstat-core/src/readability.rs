//! Readability formulas.
//!
//! Closed-form scores over paragraph counts:
//!
//! - Flesch Reading Ease: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//! - Flesch-Kincaid Grade Level: `0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59`
//! - Flesch modified (Farr, Jenkins and Patterson):
//!   `1.599 * (monosyllables * 100/words) - 1.015 * (words/sentences) - 31.517`
//! - Dale-Chall: `0.1579 * (difficult * 100/words) + 0.0496 * (words/sentences)`,
//!   plus `3.6365` when more than 5% of words are difficult.
//!
//! Zero denominators are not special-cased. A paragraph without words or
//! without sentence terminators yields NaN or infinite scores, which callers
//! can test with [`f64::is_finite`].

/// Share of difficult words above which the Dale-Chall adjustment applies.
pub const DALE_CHALL_DIFFICULT_RATIO: f64 = 0.05;

/// Constant added to the Dale-Chall raw score past the difficult-word ratio.
pub const DALE_CHALL_ADJUSTMENT: f64 = 3.6365;

/// Average words per sentence.
pub fn words_per_sentence(words: usize, sentences: usize) -> f64 {
    words as f64 / sentences as f64
}

/// `count` expressed as a ratio of `words`.
pub fn per_word(count: usize, words: usize) -> f64 {
    count as f64 / words as f64
}

// Scores must equal plain left-to-right double arithmetic bit for bit: no `mul_add`.

/// Flesch Reading Ease. Higher is easier.
#[allow(clippy::suboptimal_flops)]
pub fn flesch_reading_ease(words: usize, sentences: usize, syllables: usize) -> f64 {
    206.835 - 1.015 * words_per_sentence(words, sentences) - 84.6 * per_word(syllables, words)
}

/// Flesch-Kincaid Grade Level. Lower is more readable.
#[allow(clippy::suboptimal_flops)]
pub fn flesch_grade_level(words: usize, sentences: usize, syllables: usize) -> f64 {
    0.39 * words_per_sentence(words, sentences) + 11.8 * per_word(syllables, words) - 15.59
}

/// Flesch formula as modified by Farr, Jenkins and Patterson.
#[allow(clippy::suboptimal_flops)]
pub fn flesch_modified(words: usize, sentences: usize, monosyllables: usize) -> f64 {
    1.599 * per_word(monosyllables * 100, words) - 1.015 * words_per_sentence(words, sentences)
        - 31.517
}

/// Dale-Chall score, adjusted when difficult words exceed five percent.
#[allow(clippy::suboptimal_flops)]
pub fn dale_chall_score(words: usize, sentences: usize, difficult: usize) -> f64 {
    let raw = 0.1579 * per_word(difficult * 100, words)
        + 0.0496 * words_per_sentence(words, sentences);

    // NaN compares false, so empty paragraphs never get the adjustment.
    if per_word(difficult, words) > DALE_CHALL_DIFFICULT_RATIO {
        raw + DALE_CHALL_ADJUSTMENT
    } else {
        raw
    }
}
