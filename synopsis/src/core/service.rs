// src/core/service.rs
use crate::config::Config;
use crate::error::ModelError;
use crate::models::SummarizationParameters;

#[cfg(feature = "remote")]
mod remote;

/// A backend that turns text into a summary with a pretrained model.
///
/// Calls are blocking and happen one at a time; implementations must not
/// retry on their own.
pub trait SummarizationService {
    /// Summarizes `text` with the model identified by `model_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Load`] when the model cannot be reached or
    /// loaded, and [`ModelError::Inference`] when generation itself fails.
    fn summarize(
        &self,
        model_id: &str,
        text: &str,
        parameters: &SummarizationParameters,
    ) -> Result<String, ModelError>;
}

/// Creates the backend described by `config`.
///
/// # Errors
///
/// Returns [`ModelError::Load`] if the HTTP client cannot be created.
#[cfg(feature = "remote")]
pub fn connect(config: &Config) -> Result<Box<dyn SummarizationService>, ModelError> {
    let client = synopsis_remote::InferenceClient::new(config.endpoint.clone(), config.token())
        .map_err(|e| ModelError::Load(e.to_string()))?;
    tracing::debug!(endpoint = %client.endpoint(), "connected inference client");
    Ok(Box::new(client))
}

/// Without the `remote` feature there is no backend; every request fails
/// with [`ModelError::Load`].
///
/// # Errors
///
/// Never fails itself.
#[cfg(not(feature = "remote"))]
pub fn connect(_config: &Config) -> Result<Box<dyn SummarizationService>, ModelError> {
    Ok(Box::new(Unavailable))
}

#[cfg(not(feature = "remote"))]
struct Unavailable;

#[cfg(not(feature = "remote"))]
impl SummarizationService for Unavailable {
    fn summarize(
        &self,
        _model_id: &str,
        _text: &str,
        _parameters: &SummarizationParameters,
    ) -> Result<String, ModelError> {
        Err(ModelError::Load(
            "synopsis was built without the `remote` feature".to_owned(),
        ))
    }
}
