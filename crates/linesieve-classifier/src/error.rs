//! Error types for the line filter

use std::io;
use thiserror::Error;

/// Errors that abort a filter run
///
/// A failed classification is not one of these: it is reported and the run
/// continues with the next line.
#[derive(Error, Debug)]
pub enum FilterError {
    /// Reading the input stream failed
    #[error("Error reading input: {0}")]
    Input(#[source] io::Error),

    /// Writing the output stream failed
    #[error("Error writing output: {0}")]
    Output(#[source] io::Error),

    /// Filter options were rejected before any line was read
    #[error("Invalid filter options: {0}")]
    InvalidOptions(String),
}
