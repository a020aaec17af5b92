//! linesieve Domain Layer
//!
//! Core vocabulary for classifying lines of text against a question. It has
//! ZERO external dependencies and defines the value objects and the trait
//! boundary that the infrastructure crates implement.
//!
//! ## Key Concepts
//!
//! - **Question**: The natural-language question asked of every line
//! - **Keep Policy**: Maps a yes/no classification to keep or drop
//! - **Display Mode**: Emit kept lines only, or annotate every line
//! - **Inference Backend**: The capability that turns a prompt into an answer
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure logic only
//! - Backend implementations live in `linesieve-llm`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod policy;
pub mod question;
pub mod traits;

// Re-exports for convenience
pub use policy::{DisplayMode, KeepPolicy};
pub use question::{Question, QuestionError};
pub use traits::InferenceBackend;
