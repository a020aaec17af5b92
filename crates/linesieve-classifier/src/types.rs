//! Per-line outcomes and run totals

use std::fmt;

/// What happened to one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LineOutcome {
    /// Empty after trimming; never classified
    Skipped,
    /// Classified; `keep` is the keep policy's verdict
    Classified { line: String, keep: bool },
    /// The backend failed for this line
    Failed { line: String, error: String },
}

/// Totals for a completed filter run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    /// Lines read from the input, including empty ones
    pub lines_read: usize,
    /// Lines skipped because they were empty after trimming
    pub skipped: usize,
    /// Classified lines the keep policy retained
    pub kept: usize,
    /// Classified lines the keep policy discarded
    pub dropped: usize,
    /// Lines whose classification failed
    pub failed: usize,
}

impl FilterSummary {
    pub(crate) fn record(&mut self, outcome: &LineOutcome) {
        self.lines_read += 1;
        match outcome {
            LineOutcome::Skipped => self.skipped += 1,
            LineOutcome::Classified { keep: true, .. } => self.kept += 1,
            LineOutcome::Classified { keep: false, .. } => self.dropped += 1,
            LineOutcome::Failed { .. } => self.failed += 1,
        }
    }

    /// Lines that reached the backend
    pub fn classified(&self) -> usize {
        self.kept + self.dropped + self.failed
    }
}

impl fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lines read: {} kept, {} dropped, {} failed, {} empty",
            self.lines_read, self.kept, self.dropped, self.failed, self.skipped
        )
    }
}
