//! Configuration for the line filter

use linesieve_domain::{DisplayMode, KeepPolicy};

/// Default number of in-flight classifications (sequential)
pub const DEFAULT_CONCURRENCY: usize = 1;

/// Options fixed for a whole filter run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOptions {
    /// Which classification keeps a line
    pub keep_policy: KeepPolicy,

    /// Whether to emit kept lines only, or every line annotated
    pub display_mode: DisplayMode,

    /// Maximum classifications in flight at once. Output order is preserved
    /// whatever the value.
    pub concurrency: usize,
}

impl FilterOptions {
    /// Set the keep policy
    pub fn with_keep_policy(mut self, keep_policy: KeepPolicy) -> Self {
        self.keep_policy = keep_policy;
        self
    }

    /// Set the display mode
    pub fn with_display_mode(mut self, display_mode: DisplayMode) -> Self {
        self.display_mode = display_mode;
        self
    }

    /// Set the concurrency bound
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Validate the options
    pub fn validate(&self) -> Result<(), String> {
        if self.concurrency == 0 {
            return Err("concurrency must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            keep_policy: KeepPolicy::Affirmative,
            display_mode: DisplayMode::Filter,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}
