//! Resolve settings and run the filter.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::streams::{open_input, open_output};
use linesieve_classifier::{Classifier, FilterOptions, FilterSummary, LineFilter};
use linesieve_domain::{InferenceBackend, Question};
use linesieve_llm::OllamaBackend;
use std::fmt::Display;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tracing::info;

/// Everything a run needs, resolved from flags, environment and config.
///
/// Precedence: command-line flag, then environment variable, then config
/// file, then built-in default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// The question asked of every line
    pub question: Question,
    /// Model identifier
    pub model: String,
    /// Ollama base URL
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Keep policy, display mode and concurrency
    pub options: FilterOptions,
    /// Input file, stdin when `None`
    pub input: Option<PathBuf>,
    /// Output file, stdout when `None`
    pub output: Option<PathBuf>,
}

impl RunSettings {
    /// Merge parsed arguments over the loaded config.
    pub fn resolve(cli: Cli, config: Config) -> Result<Self> {
        let question = resolve_question(&cli)?;

        let timeout_secs = cli.timeout.unwrap_or(config.backend.timeout_secs);
        if timeout_secs == 0 {
            return Err(CliError::InvalidInput(
                "--timeout must be greater than 0".into(),
            ));
        }

        let options = FilterOptions::default()
            .with_keep_policy(cli.keep_if.into())
            .with_display_mode(cli.display_mode())
            .with_concurrency(cli.concurrency.unwrap_or(config.filter.concurrency));
        options.validate().map_err(CliError::InvalidInput)?;

        let model = cli.model.unwrap_or(config.backend.model);
        if model.trim().is_empty() {
            return Err(CliError::InvalidInput("--model cannot be empty".into()));
        }

        Ok(Self {
            question,
            model,
            base_url: cli.ollama_url.unwrap_or(config.backend.base_url),
            timeout: Duration::from_secs(timeout_secs),
            options,
            input: cli.input,
            output: cli.output,
        })
    }
}

/// The literal `--question`, or the trimmed contents of `--question-file`.
fn resolve_question(cli: &Cli) -> Result<Question> {
    let text = match (&cli.question, &cli.question_file) {
        (Some(question), _) => question.clone(),
        (None, Some(path)) => fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!(
                "Failed to read question file {}: {}",
                path.display(),
                e
            ))
        })?,
        (None, None) => return Err(CliError::Config("--question is required".into())),
    };
    Ok(Question::new(text)?)
}

/// Run against the Ollama backend described by `settings`.
pub async fn execute(settings: RunSettings) -> Result<FilterSummary> {
    let backend = OllamaBackend::with_timeout(&settings.base_url, settings.timeout)?;
    info!(url = backend.endpoint(), "Using Ollama backend");
    execute_with(backend, settings).await
}

/// Run against any backend.
///
/// Input and output are opened before the first line is classified, so a
/// bad path fails the run without touching the backend.
pub async fn execute_with<B>(backend: B, settings: RunSettings) -> Result<FilterSummary>
where
    B: InferenceBackend,
    B::Error: Display,
{
    let classifier = Classifier::new(backend, settings.model);
    let filter = LineFilter::new(classifier, settings.question, settings.options)?;

    let input = open_input(settings.input.as_deref()).await?;
    let mut output = open_output(settings.output.as_deref()).await?;

    let summary = filter.run(input, &mut output).await?;
    output.shutdown().await?;

    Ok(summary)
}
