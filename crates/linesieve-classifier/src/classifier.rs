//! Classify one line of content against a question

use crate::normalizer::{interpret_answer, Answer};
use crate::prompt::build_prompt;
use linesieve_domain::InferenceBackend;
use tracing::debug;

/// Asks an inference backend a yes/no question about content
///
/// Holds no state between calls, so one classifier can serve any number of
/// lines, concurrently or not.
#[derive(Debug, Clone)]
pub struct Classifier<B> {
    backend: B,
    model: String,
}

impl<B> Classifier<B>
where
    B: InferenceBackend,
{
    /// Create a classifier that sends every prompt to `model` on `backend`
    pub fn new(backend: B, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
        }
    }

    /// The model identifier passed to the backend
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Classify `content` against `question`
    ///
    /// # Errors
    ///
    /// Returns the backend's error unchanged. An answer that is neither a
    /// recognized "yes" nor "no" is not an error; it classifies as `false`.
    pub async fn classify(&self, question: &str, content: &str) -> Result<bool, B::Error> {
        let prompt = build_prompt(question, content);
        debug!("Prompt length: {} chars", prompt.len());

        let raw = self.backend.generate(&self.model, &prompt).await?;

        let answer = interpret_answer(&raw);
        if answer == Answer::Unrecognized {
            debug!(raw = %raw.trim(), "Unrecognized answer, treating as 'no'");
        } else {
            debug!(raw = %raw.trim(), ?answer, "Backend answered");
        }

        Ok(answer.as_bool())
    }
}
