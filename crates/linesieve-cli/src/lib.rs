//! linesieve CLI library.
//!
//! Argument parsing, configuration loading, input/output selection and
//! logging setup for the `linesieve` binary. The filtering itself lives in
//! `linesieve-classifier`.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod run;
pub mod streams;

pub use cli::{Cli, KeepIfArg};
pub use config::Config;
pub use error::{CliError, Result};
pub use run::{execute, execute_with, RunSettings};
