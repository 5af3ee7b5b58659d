// src/models/parameters.rs
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const MAX_LENGTH_RANGE: RangeInclusive<u32> = 50..=500;
pub const MIN_LENGTH_RANGE: RangeInclusive<u32> = 10..=100;
pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 0.1..=2.0;
pub const TOP_P_RANGE: RangeInclusive<f64> = 0.1..=1.0;

/// Generation settings as collected from the config file and flags, before
/// any bounds are checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationSettings {
    pub max_length: u32,
    pub min_length: u32,
    pub sampling: bool,
    pub temperature: f64,
    pub top_p: f64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_length: 150,
            min_length: 30,
            sampling: false,
            temperature: 1.0,
            top_p: 0.9,
        }
    }
}

/// Validated parameters for one summarization request.
///
/// Sampling-only values exist only in the `Sampled` variant, so a request
/// built from `Fixed` can never carry them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "ParameterPayload")]
pub enum SummarizationParameters {
    Fixed {
        max_length: u32,
        min_length: u32,
    },
    Sampled {
        max_length: u32,
        min_length: u32,
        temperature: f64,
        top_p: f64,
    },
}

impl SummarizationParameters {
    #[must_use]
    pub const fn max_length(&self) -> u32 {
        match *self {
            Self::Fixed { max_length, .. } | Self::Sampled { max_length, .. } => max_length,
        }
    }

    #[must_use]
    pub const fn min_length(&self) -> u32 {
        match *self {
            Self::Fixed { min_length, .. } | Self::Sampled { min_length, .. } => min_length,
        }
    }

    #[must_use]
    pub const fn is_sampling(&self) -> bool {
        matches!(self, Self::Sampled { .. })
    }

    #[must_use]
    pub const fn temperature(&self) -> Option<f64> {
        match *self {
            Self::Fixed { .. } => None,
            Self::Sampled { temperature, .. } => Some(temperature),
        }
    }

    #[must_use]
    pub const fn top_p(&self) -> Option<f64> {
        match *self {
            Self::Fixed { .. } => None,
            Self::Sampled { top_p, .. } => Some(top_p),
        }
    }
}

/// Keyword-argument shape of the parameters as the pipeline expects them.
#[derive(Debug, Clone, Copy, Serialize)]
struct ParameterPayload {
    max_length: u32,
    min_length: u32,
    do_sample: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f64>,
}

impl From<SummarizationParameters> for ParameterPayload {
    fn from(parameters: SummarizationParameters) -> Self {
        Self {
            max_length: parameters.max_length(),
            min_length: parameters.min_length(),
            do_sample: parameters.is_sampling(),
            temperature: parameters.temperature(),
            top_p: parameters.top_p(),
        }
    }
}
