// src/wire.rs
use serde::{Deserialize, Serialize};

use crate::error::RemoteError;

/// Generation keyword arguments forwarded to the summarization pipeline.
///
/// `temperature` and `top_p` are left out of the payload entirely when they
/// are `None`, some backends reject them when `do_sample` is false.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationParameters {
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SummarizationRequest<'a> {
    pub inputs: &'a str,
    pub parameters: &'a GenerationParameters,
}

#[derive(Debug, Deserialize)]
struct SummaryItem {
    summary_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SummaryResponse {
    Batch(Vec<SummaryItem>),
    Single(SummaryItem),
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
    #[serde(default)]
    pub estimated_time: Option<f64>,
}

/// Extracts the first summary from a successful response body.
pub(crate) fn parse_summary(body: &str) -> Result<String, RemoteError> {
    match serde_json::from_str::<SummaryResponse>(body)? {
        SummaryResponse::Single(item) => Ok(item.summary_text),
        SummaryResponse::Batch(items) => items
            .into_iter()
            .next()
            .map(|item| item.summary_text)
            .ok_or(RemoteError::EmptyResponse),
    }
}
