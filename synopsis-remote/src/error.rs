// src/error.rs
use thiserror::Error;

use crate::wire::ErrorBody;

#[derive(Error, Debug)]
pub enum RemoteError {
    /// The request never produced a response (DNS, TLS, connection, timeout).
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A response arrived but its body could not be read.
    #[error("Failed to read response from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered but cannot serve the model right now, or the
    /// credentials do not allow it.
    #[error("Model {model} is unavailable (HTTP {status}): {message}")]
    Unavailable {
        model: String,
        status: u16,
        message: String,
        estimated_time: Option<f64>,
    },

    #[error("Inference endpoint returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode inference response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Inference response contained no summary")]
    EmptyResponse,
}

impl RemoteError {
    /// Whether the failure happened before any generation could start:
    /// no response arrived at all, or the endpoint refused to serve the model.
    #[must_use]
    pub const fn is_model_unavailable(&self) -> bool {
        match self {
            Self::Transport { .. } | Self::Unavailable { .. } => true,
            Self::Body { .. } | Self::Status { .. } | Self::Decode(_) | Self::EmptyResponse => {
                false
            }
        }
    }
}

/// Turns a non-success response into an error, keeping the endpoint's own
/// message when the body carries one.
pub(crate) fn classify_failure(model: &str, status: u16, body: &str) -> RemoteError {
    let (message, estimated_time) = match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => (parsed.error, parsed.estimated_time),
        Err(_) => (body.trim().to_owned(), None),
    };

    match status {
        401 | 403 | 404 | 503 => RemoteError::Unavailable {
            model: model.to_owned(),
            status,
            message,
            estimated_time,
        },
        _ => RemoteError::Status { status, message },
    }
}
