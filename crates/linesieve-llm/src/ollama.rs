//! Ollama Backend Implementation
//!
//! Provides integration with Ollama's local LLM API.
//!
//! # Features
//!
//! - Async HTTP communication with the `/api/generate` endpoint
//! - Configurable endpoint and request timeout
//! - Non-streaming requests only: the completed answer is returned
//!
//! Failed calls are not retried.
//!
//! # Examples
//!
//! ```no_run
//! use linesieve_llm::OllamaBackend;
//! use linesieve_domain::InferenceBackend;
//!
//! # async fn example() -> Result<(), linesieve_llm::InferenceError> {
//! let backend = OllamaBackend::new("http://localhost:11434")?;
//! let answer = backend.generate("llama3.1:latest", "Say 'yes'").await?;
//! # Ok(())
//! # }
//! ```

use crate::InferenceError;
use linesieve_domain::InferenceBackend;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "llama3.1:latest";

/// Default timeout for inference requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Ollama API backend for local LLM inference
#[derive(Debug, Clone)]
pub struct OllamaBackend {
    endpoint: String,
    client: reqwest::Client,
}

/// Request body for Ollama generate API
#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Response from Ollama generate API
#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
    #[serde(default)]
    done: bool,
    #[serde(default)]
    total_duration: Option<u64>,
    #[serde(default)]
    eval_count: Option<u64>,
}

impl OllamaBackend {
    /// Create a new Ollama backend with the default request timeout
    ///
    /// An empty `endpoint` falls back to [`DEFAULT_ENDPOINT`].
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be constructed
    pub fn new(endpoint: impl Into<String>) -> Result<Self, InferenceError> {
        Self::with_timeout(endpoint, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new Ollama backend with an explicit request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, InferenceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InferenceError::new(format!("failed to build HTTP client: {}", e)))?;

        let endpoint = endpoint.into();
        let endpoint = match endpoint.trim_end_matches('/') {
            "" => DEFAULT_ENDPOINT.to_string(),
            trimmed => trimmed.to_string(),
        };

        Ok(Self { endpoint, client })
    }

    /// Create a new Ollama backend at `http://localhost:11434`
    pub fn default_endpoint() -> Result<Self, InferenceError> {
        Self::new(DEFAULT_ENDPOINT)
    }

    /// The base URL requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.endpoint)
    }
}

impl InferenceBackend for OllamaBackend {
    type Error = InferenceError;

    /// Generate text using Ollama API
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Ollama is not running or unreachable
    /// - The API answers with a non-success status
    /// - The response body is not the expected JSON
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, Self::Error> {
        let request_body = GenerateRequest {
            model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(self.generate_url())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                InferenceError::new(format!(
                    "failed to connect to Ollama (is it running?): {}",
                    e
                ))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::new(format!(
                "Ollama API error (status {}): {}",
                status.as_u16(),
                body
            )));
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::new(format!("failed to decode response: {}", e)))?;

        debug!(
            model,
            done = generated.done,
            total_duration_ns = generated.total_duration,
            eval_count = generated.eval_count,
            "Ollama generate completed"
        );

        Ok(generated.response)
    }
}
