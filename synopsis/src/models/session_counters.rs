// src/models/session_counters.rs
use serde::Serialize;

use crate::models::TextStats;

/// Running totals for one interactive session. Nothing is persisted; the
/// presentation layer owns the value and decides when to reset it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionCounters {
    pub summaries_created: u64,
    pub characters_processed: u64,
}

impl SessionCounters {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            summaries_created: 0,
            characters_processed: 0,
        }
    }

    /// Counts one successful summary of a text with `original` statistics.
    #[inline]
    pub fn record(&mut self, original: &TextStats) {
        let characters = u64::try_from(original.characters).unwrap_or(u64::MAX);
        self.summaries_created = self.summaries_created.saturating_add(1);
        self.characters_processed = self.characters_processed.saturating_add(characters);
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
