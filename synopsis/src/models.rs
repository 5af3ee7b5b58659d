// src/models.rs
mod comparison;
mod model_choice;
mod parameters;
mod session_counters;
mod text_stats;
mod validation;

pub use comparison::ComparisonResult;
pub use model_choice::ModelChoice;
pub use parameters::{
    GenerationSettings, MAX_LENGTH_RANGE, MIN_LENGTH_RANGE, SummarizationParameters,
    TEMPERATURE_RANGE, TOP_P_RANGE,
};
pub use session_counters::SessionCounters;
pub use text_stats::TextStats;
pub use validation::ValidationOutcome;
