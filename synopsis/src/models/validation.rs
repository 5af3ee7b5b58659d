// src/models/validation.rs

/// Result of the pre-flight check on input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Nothing but whitespace.
    Empty,
    /// Fewer words than the model needs for a useful summary.
    TooShort,
    Ok,
}

impl ValidationOutcome {
    #[inline]
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}
