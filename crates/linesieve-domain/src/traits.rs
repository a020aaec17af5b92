//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use std::future::Future;

/// Trait for a text-generation backend
///
/// Implemented by the infrastructure layer (linesieve-llm)
pub trait InferenceBackend {
    /// Error type for inference operations
    type Error;

    /// Generate a completed answer for `prompt` under the named `model`
    fn generate(
        &self,
        model: &str,
        prompt: &str,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

