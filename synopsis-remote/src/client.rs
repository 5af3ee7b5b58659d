// src/client.rs
use reqwest::blocking::Client;
use tracing::debug;

use crate::error::{RemoteError, classify_failure};
use crate::wire::{GenerationParameters, SummarizationRequest, parse_summary};

#[derive(Debug, Clone)]
pub struct InferenceClient {
    http: Client,
    endpoint: String,
    token: Option<String>,
}

impl InferenceClient {
    /// Creates a client for `endpoint`, sending `token` as a bearer token
    /// when present. The model id is appended to `endpoint` as the last path
    /// segment.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Transport`] if the HTTP client cannot be built
    /// (for example when the TLS backend fails to initialise).
    pub fn new(endpoint: impl Into<String>, token: Option<String>) -> Result<Self, RemoteError> {
        let endpoint = endpoint.into();
        let http = Client::builder()
            .user_agent(concat!("synopsis-remote/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| RemoteError::Transport {
                url: endpoint.clone(),
                source,
            })?;

        Ok(Self {
            http,
            endpoint,
            token,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn model_url(&self, model_id: &str) -> String {
        format!("{}/{model_id}", self.endpoint.trim_end_matches('/'))
    }

    /// Sends `text` to `model_id` and returns the generated summary.
    ///
    /// # Errors
    ///
    /// * [`RemoteError::Transport`] when no response arrives
    /// * [`RemoteError::Body`] when the response body cannot be read
    /// * [`RemoteError::Unavailable`] when the model cannot be served
    /// * [`RemoteError::Status`] for any other non-success status
    /// * [`RemoteError::Decode`] / [`RemoteError::EmptyResponse`] when the
    ///   body does not contain a summary
    pub fn summarize(
        &self,
        model_id: &str,
        text: &str,
        parameters: &GenerationParameters,
    ) -> Result<String, RemoteError> {
        let url = self.model_url(model_id);
        let payload = SummarizationRequest {
            inputs: text,
            parameters,
        };
        debug!(%url, characters = text.len(), ?parameters, "sending summarization request");

        let mut request = self.http.post(&url).json(&payload);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|source| RemoteError::Transport {
            url: url.clone(),
            source,
        })?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|source| RemoteError::Body { url, source })?;

        if !status.is_success() {
            return Err(classify_failure(model_id, status.as_u16(), &body));
        }

        parse_summary(&body)
    }
}
