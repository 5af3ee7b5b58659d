// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Hint shown after any failure coming from the model backend.
pub const MODEL_FAILURE_REMEDY: &str = "Try a shorter text or choose a different model.";

/// Failure reported by a summarization backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The model could not be loaded or the backend is unreachable or
    /// misconfigured.
    #[error("model could not be loaded: {0}")]
    Load(String),

    /// The backend accepted the request but failed while generating.
    #[error("generation failed: {0}")]
    Inference(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummarizeError {
    #[error("please enter some text first")]
    EmptyInput,

    #[error("text is too short ({words} words); enter at least {minimum} words")]
    TooShortInput { words: usize, minimum: usize },

    #[error("invalid generation parameter: {0}")]
    InvalidParameter(#[from] ParameterError),

    #[error("failed to load model {model}: {message}")]
    ModelLoadFailure { model: String, message: String },

    #[error("model {model} failed to summarize the text: {message}")]
    InferenceFailure { model: String, message: String },

    #[error("cannot compare against an original text with no words")]
    DegenerateComparison,
}

impl SummarizeError {
    /// Whether the input was rejected before any model was contacted.
    #[must_use]
    pub const fn is_input_warning(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::TooShortInput { .. })
    }

    #[must_use]
    pub const fn remedy(&self) -> Option<&'static str> {
        match self {
            Self::ModelLoadFailure { .. } | Self::InferenceFailure { .. } => {
                Some(MODEL_FAILURE_REMEDY)
            }
            Self::EmptyInput
            | Self::TooShortInput { .. }
            | Self::InvalidParameter(_)
            | Self::DegenerateComparison => None,
        }
    }

    pub(crate) fn from_model_error(model_id: &str, error: ModelError) -> Self {
        match error {
            ModelError::Load(message) => Self::ModelLoadFailure {
                model: model_id.to_owned(),
                message,
            },
            ModelError::Inference(message) => Self::InferenceFailure {
                model: model_id.to_owned(),
                message,
            },
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
