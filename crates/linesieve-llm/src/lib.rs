//! linesieve Inference Backends
//!
//! Implementations of the `InferenceBackend` trait from `linesieve-domain`.
//!
//! # Backends
//!
//! - `MockBackend`: Deterministic stand-in for testing
//! - `OllamaBackend`: Local Ollama API integration
//!
//! # Examples
//!
//! ```
//! use linesieve_llm::MockBackend;
//! use linesieve_domain::InferenceBackend;
//!
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! let backend = MockBackend::new("yes");
//! let answer = rt.block_on(backend.generate("llama3.1:latest", "any prompt")).unwrap();
//! assert_eq!(answer, "yes");
//! ```

#![warn(missing_docs)]

pub mod ollama;

use linesieve_domain::InferenceBackend;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;

pub use ollama::OllamaBackend;

/// A failed inference call
///
/// Connectivity problems, non-success statuses and malformed payloads are all
/// reported through this one type. Callers only ever display the cause.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("inference failed: {cause}")]
pub struct InferenceError {
    cause: String,
}

impl InferenceError {
    /// Create an error with a human-readable cause
    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }

    /// The human-readable cause
    pub fn cause(&self) -> &str {
        &self.cause
    }
}

#[derive(Debug, Clone)]
enum Scripted {
    Answer(String, Option<Duration>),
    Failure(String),
}

/// A single recorded `generate` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Model identifier passed by the caller
    pub model: String,
    /// Prompt passed by the caller
    pub prompt: String,
}

/// Mock inference backend for deterministic testing
///
/// Returns pre-configured answers without making any network calls.
///
/// # Examples
///
/// ```
/// use linesieve_llm::MockBackend;
/// use linesieve_domain::InferenceBackend;
///
/// let rt = tokio::runtime::Runtime::new().unwrap();
///
/// let mut backend = MockBackend::default();
/// backend.add_response("prompt1", "yes");
/// backend.add_error("prompt2", "connection refused");
///
/// assert_eq!(rt.block_on(backend.generate("m", "prompt1")).unwrap(), "yes");
/// assert!(rt.block_on(backend.generate("m", "prompt2")).is_err());
/// assert_eq!(backend.call_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MockBackend {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, Scripted>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockBackend {
    /// Create a new MockBackend with a fixed answer for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a specific answer for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.script(prompt.into(), Scripted::Answer(response.into(), None));
    }

    /// Add an answer that is only returned after `delay` has elapsed
    pub fn add_delayed_response(
        &mut self,
        prompt: impl Into<String>,
        response: impl Into<String>,
        delay: Duration,
    ) {
        self.script(prompt.into(), Scripted::Answer(response.into(), Some(delay)));
    }

    /// Configure to fail for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>, cause: impl Into<String>) {
        self.script(prompt.into(), Scripted::Failure(cause.into()));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or_default()
    }

    /// Every call received so far, in arrival order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    fn script(&mut self, prompt: String, scripted: Scripted) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.insert(prompt, scripted);
        }
    }

    fn lookup(&self, model: &str, prompt: &str) -> Result<Scripted, InferenceError> {
        self.calls
            .lock()
            .map_err(|_| InferenceError::new("mock call log poisoned"))?
            .push(RecordedCall {
                model: model.to_string(),
                prompt: prompt.to_string(),
            });

        let responses = self
            .responses
            .lock()
            .map_err(|_| InferenceError::new("mock responses poisoned"))?;
        Ok(responses
            .get(prompt)
            .cloned()
            .unwrap_or_else(|| Scripted::Answer(self.default_response.clone(), None)))
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new("no")
    }
}

impl InferenceBackend for MockBackend {
    type Error = InferenceError;

    async fn generate(&self, model: &str, prompt: &str) -> Result<String, Self::Error> {
        match self.lookup(model, prompt)? {
            Scripted::Answer(answer, None) => Ok(answer),
            Scripted::Answer(answer, Some(delay)) => {
                tokio::time::sleep(delay).await;
                Ok(answer)
            }
            Scripted::Failure(cause) => Err(InferenceError::new(cause)),
        }
    }
}
