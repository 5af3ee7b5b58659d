// src/core/pipeline.rs
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use tracing::{info, warn};

use crate::core::analyzer::reading_minutes;
use crate::core::request::{build_parameters, compute_comparison, ensure_summarizable};
use crate::core::service::SummarizationService;
use crate::error::SummarizeError;
use crate::models::{
    ComparisonResult, GenerationSettings, ModelChoice, SessionCounters, SummarizationParameters,
};

/// Everything produced by one successful summarization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryOutcome {
    pub model: ModelChoice,
    pub model_id: &'static str,
    pub parameters: SummarizationParameters,
    pub summary: String,
    pub comparison: ComparisonResult,
    pub original_reading_minutes: u64,
    pub summary_reading_minutes: u64,
    /// Local wall-clock time the summary was produced.
    pub created_at: NaiveDateTime,
}

/// Runs one summarization end to end.
///
/// The text is validated before the backend is contacted, so empty or too
/// short input never reaches the model. `counters` is only updated when a
/// summary was produced and compared.
///
/// # Errors
///
/// * [`SummarizeError::EmptyInput`] / [`SummarizeError::TooShortInput`]
/// * [`SummarizeError::InvalidParameter`] for out-of-range settings
/// * [`SummarizeError::ModelLoadFailure`] / [`SummarizeError::InferenceFailure`]
///   from the backend
/// * [`SummarizeError::DegenerateComparison`] (unreachable after validation)
pub fn summarize(
    service: &dyn SummarizationService,
    model: ModelChoice,
    text: &str,
    settings: &GenerationSettings,
    counters: &mut SessionCounters,
) -> Result<SummaryOutcome, SummarizeError> {
    if let Err(rejected) = ensure_summarizable(text) {
        warn!(%rejected, "input rejected before summarization");
        return Err(rejected);
    }

    let parameters = build_parameters(settings)?;
    let model_id = model.model_id();

    let summary = service
        .summarize(model_id, text, &parameters)
        .map_err(|e| SummarizeError::from_model_error(model_id, e))?;

    let comparison = compute_comparison(text, &summary)?;
    counters.record(&comparison.original);

    info!(
        model = model_id,
        original_words = comparison.original.words,
        summary_words = comparison.summary.words,
        compression = comparison.compression_ratio,
        "summary created"
    );

    Ok(SummaryOutcome {
        model,
        model_id,
        parameters,
        original_reading_minutes: reading_minutes(comparison.original.words),
        summary_reading_minutes: reading_minutes(comparison.summary.words),
        summary,
        comparison,
        created_at: Local::now().naive_local(),
    })
}
