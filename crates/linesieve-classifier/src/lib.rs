//! linesieve Classifier
//!
//! Decides keep/drop for lines of text by asking an LLM a yes/no question
//! about each one.
//!
//! # Architecture
//!
//! ```text
//! line → build_prompt → InferenceBackend → normalize_answer → KeepPolicy → output
//! ```
//!
//! # Key Features
//!
//! - **Prompt Builder**: Fixed question/content/instruction prompt
//! - **Answer Normalizer**: Recognized yes/no synonyms, everything else is "no"
//! - **Classifier**: One backend call per line, failures propagated unchanged
//! - **Line Filter**: Streaming driver with filter and annotate display modes,
//!   optional bounded concurrency with in-order output
//!
//! # Example Usage
//!
//! ```no_run
//! use linesieve_classifier::{Classifier, FilterOptions, LineFilter};
//! use linesieve_domain::{DisplayMode, Question};
//! use linesieve_llm::MockBackend;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let classifier = Classifier::new(MockBackend::new("yes"), "llama3.1:latest");
//! let question = Question::new("Is this a programming language?")?;
//! let options = FilterOptions::default().with_display_mode(DisplayMode::Annotate);
//!
//! let filter = LineFilter::new(classifier, question, options)?;
//!
//! let mut output = Vec::new();
//! let summary = filter.run("Python\nEnglish\n".as_bytes(), &mut output).await?;
//!
//! println!("Kept: {} lines", summary.kept);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod error;
mod filter;
mod normalizer;
mod prompt;
mod types;


pub use classifier::Classifier;
pub use config::{FilterOptions, DEFAULT_CONCURRENCY};
pub use error::FilterError;
pub use filter::LineFilter;
pub use normalizer::{
    interpret_answer, normalize_answer, Answer, AFFIRMATIVE_ANSWERS, NEGATIVE_ANSWERS,
};
pub use prompt::build_prompt;
pub use types::FilterSummary;
