//! Heuristic syllable scanner.
//!
//! Counts vowel groups by scanning a normalized word right to left. This is a
//! fixed heuristic, not a dictionary syllabifier: it treats `y` and the
//! umlauts `ä ö ü` as vowels, and a leading cluster of two or more
//! non-vowels costs one syllable. That last rule can take a short word such
//! as `"tree"` or `"hmm"` down to zero, and the result is never clamped.

/// Returns `true` for the characters the scanner treats as vowels.
pub const fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y' | 'ä' | 'ö' | 'ü')
}

/// Count syllables in one normalized (lowercased) word.
///
/// Starts at one. Walking backwards, each vowel whose left neighbour is a
/// consonant adds one; the neighbour is consumed along with the vowel. A
/// vowel at index 0 or 1 ends the scan without inspecting its neighbour.
/// Words longer than two characters that open with two non-vowels lose one.
pub fn count_syllables(word: &str) -> usize {
    let chars: Vec<char> = word.chars().collect();
    let mut count = 1;

    // `cursor` is the number of characters not yet consumed.
    let mut cursor = chars.len();
    while cursor > 0 {
        let current = chars[cursor - 1];
        cursor -= 1;
        if !is_vowel(current) {
            continue;
        }
        if cursor <= 1 {
            break;
        }
        if !is_vowel(chars[cursor - 1]) {
            count += 1;
        }
        cursor -= 1;
    }

    if chars.len() > 2 && starts_with_consonant_cluster(&chars) {
        count -= 1;
    }

    count
}

fn starts_with_consonant_cluster(chars: &[char]) -> bool {
    matches!(chars, [first, second, ..] if !is_vowel(*first) && !is_vowel(*second))
}
