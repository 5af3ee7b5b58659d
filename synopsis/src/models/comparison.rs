// src/models/comparison.rs
use serde::Serialize;

use crate::error::SummarizeError;
use crate::models::TextStats;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub original: TextStats,
    pub summary: TextStats,
    /// Percentage of words removed; negative when the summary is longer.
    pub compression_ratio: f64,
}

impl ComparisonResult {
    /// Builds a comparison from already computed statistics.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizeError::DegenerateComparison`] when the original
    /// text has no words.
    #[inline]
    #[expect(clippy::as_conversions, reason = "Precision not critical")]
    #[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
    pub fn from_stats(original: TextStats, summary: TextStats) -> Result<Self, SummarizeError> {
        if original.words == 0 {
            return Err(SummarizeError::DegenerateComparison);
        }
        let compression_ratio = (1.0 - summary.words as f64 / original.words as f64) * 100.0;
        Ok(Self {
            original,
            summary,
            compression_ratio,
        })
    }
}
