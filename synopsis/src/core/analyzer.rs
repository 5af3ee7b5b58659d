// src/core/analyzer.rs
use crate::models::TextStats;

/// Average silent reading speed used for the reading-time estimate.
pub const WORDS_PER_MINUTE: f64 = 200.0;

const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Computes descriptive statistics for `text`.
///
/// * words: whitespace separated tokens, so `""` has none
/// * characters: Unicode scalar values, no normalisation
/// * sentences: number of `.`, `!` and `?` characters
/// * paragraphs: `\n` separated segments with non-blank content
#[inline]
#[must_use]
pub fn analyze(text: &str) -> TextStats {
    TextStats {
        words: count_words(text),
        characters: text.chars().count(),
        sentences: text
            .chars()
            .filter(|c| SENTENCE_TERMINATORS.contains(c))
            .count(),
        paragraphs: text
            .split('\n')
            .filter(|segment| !segment.trim().is_empty())
            .count(),
    }
}

#[inline]
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated reading time of `text` in whole minutes, never less than one.
#[inline]
#[must_use]
pub fn estimate_reading_time(text: &str) -> u64 {
    reading_minutes(count_words(text))
}

/// Minutes needed to read `words` words. Halves round to the even minute.
#[inline]
#[must_use]
#[expect(clippy::as_conversions, reason = "Precision not critical")]
#[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
#[expect(clippy::cast_possible_truncation, reason = "Value is rounded and non-negative")]
#[expect(clippy::cast_sign_loss, reason = "Value is rounded and non-negative")]
pub fn reading_minutes(words: usize) -> u64 {
    let minutes = (words as f64 / WORDS_PER_MINUTE).round_ties_even();
    (minutes as u64).max(1)
}
