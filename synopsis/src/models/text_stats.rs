// src/models/text_stats.rs
use serde::Serialize;

/// Descriptive statistics of a piece of text.
///
/// `sentences` is a tally of `.`, `!` and `?` characters rather than a real
/// sentence segmentation, so decimals and ellipses count too.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
    pub sentences: usize,
    pub paragraphs: usize,
}

impl TextStats {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words: 0,
            characters: 0,
            sentences: 0,
            paragraphs: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words == 0
    }
}
