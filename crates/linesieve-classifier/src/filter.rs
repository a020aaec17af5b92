//! Stream driver: classify each input line and write the survivors

use crate::classifier::Classifier;
use crate::config::FilterOptions;
use crate::error::FilterError;
use crate::types::{FilterSummary, LineOutcome};
use futures::stream::{self, StreamExt};
use linesieve_domain::{InferenceBackend, Question};
use std::fmt::Display;
use std::io;
use std::pin::pin;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{error, info};

/// Filters a stream of lines through a [`Classifier`]
///
/// Lines are trimmed; empty lines are skipped without being classified.
/// Output always follows input order, even when `concurrency > 1` lets
/// several classifications run at once.
pub struct LineFilter<B> {
    classifier: Classifier<B>,
    question: Question,
    options: FilterOptions,
}

impl<B> LineFilter<B>
where
    B: InferenceBackend,
    B::Error: Display,
{
    /// Create a new filter
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidOptions`] if `options` fail validation
    pub fn new(
        classifier: Classifier<B>,
        question: Question,
        options: FilterOptions,
    ) -> Result<Self, FilterError> {
        options.validate().map_err(FilterError::InvalidOptions)?;
        Ok(Self {
            classifier,
            question,
            options,
        })
    }

    /// Read `input` to the end, writing kept (or annotated) lines to `output`
    ///
    /// A failed classification is logged and the line produces no output.
    /// Output already written stays written if the run fails part way.
    ///
    /// # Errors
    ///
    /// Returns error if reading `input` or writing `output` fails
    pub async fn run<R, W>(&self, input: R, output: &mut W) -> Result<FilterSummary, FilterError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(
            model = self.classifier.model(),
            keep_if = %self.options.keep_policy,
            display = ?self.options.display_mode,
            concurrency = self.options.concurrency,
            "Starting filter run"
        );

        // The stream ends right after the first read error
        let lines = stream::unfold(Some(input), |state| async move {
            let mut reader = match state {
                Some(reader) => reader,
                None => return None,
            };
            let mut buf = Vec::new();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => None,
                Ok(_) => Some((Ok(decode_line(&buf)), Some(reader))),
                Err(e) => Some((Err(e), None)),
            }
        });

        // `buffered` keeps at most `concurrency` lines in flight and yields
        // their outcomes in input order
        let mut outcomes = pin!(lines
            .map(|read| self.evaluate(read))
            .buffered(self.options.concurrency));

        let mut summary = FilterSummary::default();
        while let Some(outcome) = outcomes.next().await {
            let outcome = outcome.map_err(FilterError::Input)?;
            summary.record(&outcome);

            match outcome {
                LineOutcome::Skipped => {}
                LineOutcome::Failed { line, error } => {
                    error!(line = %line, error = %error, "Error evaluating line");
                }
                LineOutcome::Classified { line, keep } => {
                    if let Some(rendered) = self.options.display_mode.render(&line, keep) {
                        write_line(output, &rendered)
                            .await
                            .map_err(FilterError::Output)?;
                    }
                }
            }
        }

        info!("Filter run finished: {}", summary);
        Ok(summary)
    }

    async fn evaluate(&self, read: io::Result<String>) -> io::Result<LineOutcome> {
        let raw = read?;
        let line = raw.trim();
        if line.is_empty() {
            return Ok(LineOutcome::Skipped);
        }

        let outcome = match self.classifier.classify(self.question.as_str(), line).await {
            Ok(classification) => LineOutcome::Classified {
                line: line.to_string(),
                keep: self.options.keep_policy.should_keep(classification),
            },
            Err(e) => LineOutcome::Failed {
                line: line.to_string(),
                error: e.to_string(),
            },
        };
        Ok(outcome)
    }
}

/// Strip the line terminator and decode, replacing invalid UTF-8
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

async fn write_line<W>(output: &mut W, line: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(line.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}
