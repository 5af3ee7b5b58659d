// src/core/service/remote.rs
use synopsis_remote::{GenerationParameters, InferenceClient, RemoteError};

use crate::core::service::SummarizationService;
use crate::error::ModelError;
use crate::models::SummarizationParameters;

fn to_wire(parameters: &SummarizationParameters) -> GenerationParameters {
    GenerationParameters {
        max_length: parameters.max_length(),
        min_length: parameters.min_length(),
        do_sample: parameters.is_sampling(),
        temperature: parameters.temperature(),
        top_p: parameters.top_p(),
    }
}

fn to_model_error(error: &RemoteError) -> ModelError {
    if error.is_model_unavailable() {
        ModelError::Load(error.to_string())
    } else {
        ModelError::Inference(error.to_string())
    }
}

impl SummarizationService for InferenceClient {
    fn summarize(
        &self,
        model_id: &str,
        text: &str,
        parameters: &SummarizationParameters,
    ) -> Result<String, ModelError> {
        Self::summarize(self, model_id, text, &to_wire(parameters)).map_err(|e| to_model_error(&e))
    }
}
