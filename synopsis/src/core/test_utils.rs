// src/core/test_utils.rs
use std::cell::RefCell;

use crate::core::service::SummarizationService;
use crate::error::ModelError;
use crate::models::SummarizationParameters;

/// `count` space separated words.
pub fn words(count: usize) -> String {
    vec!["word"; count].join(" ")
}

pub struct FixedSummary(String);

impl FixedSummary {
    pub fn new(summary: &str) -> Self {
        Self(summary.to_owned())
    }
}

impl SummarizationService for FixedSummary {
    fn summarize(
        &self,
        _model_id: &str,
        _text: &str,
        _parameters: &SummarizationParameters,
    ) -> Result<String, ModelError> {
        Ok(self.0.clone())
    }
}

pub struct FailingService(pub ModelError);

impl SummarizationService for FailingService {
    fn summarize(
        &self,
        _model_id: &str,
        _text: &str,
        _parameters: &SummarizationParameters,
    ) -> Result<String, ModelError> {
        Err(self.0.clone())
    }
}

/// Answers with a fixed summary and remembers every request it saw.
pub struct RecordingService {
    summary: String,
    calls: RefCell<Vec<(String, SummarizationParameters)>>,
}

impl RecordingService {
    pub fn new(summary: &str) -> Self {
        Self {
            summary: summary.to_owned(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, SummarizationParameters)> {
        self.calls.borrow().clone()
    }
}

impl SummarizationService for RecordingService {
    fn summarize(
        &self,
        model_id: &str,
        _text: &str,
        parameters: &SummarizationParameters,
    ) -> Result<String, ModelError> {
        self.calls
            .borrow_mut()
            .push((model_id.to_owned(), *parameters));
        Ok(self.summary.clone())
    }
}
