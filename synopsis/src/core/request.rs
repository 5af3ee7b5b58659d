// src/core/request.rs
use std::ops::RangeInclusive;
use tracing::{debug, warn};

use crate::core::analyzer::{analyze, count_words};
use crate::error::{ParameterError, SummarizeError};
use crate::models::{
    ComparisonResult, GenerationSettings, MAX_LENGTH_RANGE, MIN_LENGTH_RANGE,
    SummarizationParameters, TEMPERATURE_RANGE, TOP_P_RANGE, ValidationOutcome,
};

/// Fewest words worth sending to a summarization model.
pub const MIN_WORDS: usize = 20;

/// Pre-flight check run before any model is contacted.
#[inline]
#[must_use]
pub fn validate(text: &str) -> ValidationOutcome {
    if text.trim().is_empty() {
        ValidationOutcome::Empty
    } else if count_words(text) < MIN_WORDS {
        ValidationOutcome::TooShort
    } else {
        ValidationOutcome::Ok
    }
}

/// Like [`validate`], but as an error carrying the word count.
///
/// # Errors
///
/// Returns [`SummarizeError::EmptyInput`] or [`SummarizeError::TooShortInput`].
pub fn ensure_summarizable(text: &str) -> Result<(), SummarizeError> {
    match validate(text) {
        ValidationOutcome::Ok => Ok(()),
        ValidationOutcome::Empty => Err(SummarizeError::EmptyInput),
        ValidationOutcome::TooShort => Err(SummarizeError::TooShortInput {
            words: count_words(text),
            minimum: MIN_WORDS,
        }),
    }
}

/// Assembles the parameters for one summarization request.
///
/// `max_length` and `min_length` are bounded independently; a minimum above
/// the maximum is passed through to the model with a warning. Temperature
/// and top-p are only checked, and only kept, when sampling is enabled.
///
/// # Errors
///
/// Returns [`ParameterError::OutOfRange`] for the first value outside its
/// allowed range.
pub fn build_parameters(
    settings: &GenerationSettings,
) -> Result<SummarizationParameters, ParameterError> {
    check_length("max_length", settings.max_length, &MAX_LENGTH_RANGE)?;
    check_length("min_length", settings.min_length, &MIN_LENGTH_RANGE)?;

    if settings.min_length > settings.max_length {
        warn!(
            min_length = settings.min_length,
            max_length = settings.max_length,
            "min_length exceeds max_length; passing both to the model unchanged"
        );
    }

    let parameters = if settings.sampling {
        check_float("temperature", settings.temperature, &TEMPERATURE_RANGE)?;
        check_float("top_p", settings.top_p, &TOP_P_RANGE)?;
        SummarizationParameters::Sampled {
            max_length: settings.max_length,
            min_length: settings.min_length,
            temperature: settings.temperature,
            top_p: settings.top_p,
        }
    } else {
        SummarizationParameters::Fixed {
            max_length: settings.max_length,
            min_length: settings.min_length,
        }
    };

    debug!(?parameters, "built summarization parameters");
    Ok(parameters)
}

/// Analyzes both texts and computes the compression ratio between them.
///
/// # Errors
///
/// Returns [`SummarizeError::DegenerateComparison`] if `original` has no
/// words. Input that passed [`validate`] never triggers this.
#[inline]
pub fn compute_comparison(original: &str, summary: &str) -> Result<ComparisonResult, SummarizeError> {
    ComparisonResult::from_stats(analyze(original), analyze(summary))
}

fn check_length(
    name: &'static str,
    value: u32,
    range: &RangeInclusive<u32>,
) -> Result<(), ParameterError> {
    if range.contains(&value) {
        return Ok(());
    }
    Err(ParameterError::OutOfRange {
        name,
        value: value.into(),
        min: (*range.start()).into(),
        max: (*range.end()).into(),
    })
}

fn check_float(
    name: &'static str,
    value: f64,
    range: &RangeInclusive<f64>,
) -> Result<(), ParameterError> {
    if range.contains(&value) {
        return Ok(());
    }
    Err(ParameterError::OutOfRange {
        name,
        value,
        min: *range.start(),
        max: *range.end(),
    })
}
