// src/lib.rs
//! Text statistics and summarization-request orchestration.
//!
//! [`analyze`] and [`estimate_reading_time`] describe a text,
//! [`validate`], [`build_parameters`] and [`compute_comparison`] prepare and
//! evaluate a request, and [`summarize`] runs the whole flow against any
//! [`SummarizationService`].

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod shell;
mod utils;

pub use cli::{Args, run, run_with};
pub use config::Config;
pub use crate::core::analyzer::{analyze, estimate_reading_time};
pub use crate::core::pipeline::{SummaryOutcome, summarize};
pub use crate::core::report::{render_report, report_file_name, write_report};
pub use crate::core::request::{MIN_WORDS, build_parameters, compute_comparison, validate};
pub use crate::core::samples::Sample;
pub use crate::core::service::{SummarizationService, connect};
pub use error::{ConfigError, ModelError, ParameterError, SummarizeError};
pub use models::{
    ComparisonResult, GenerationSettings, ModelChoice, SessionCounters, SummarizationParameters,
    TextStats, ValidationOutcome,
};
pub use shell::Shell;
