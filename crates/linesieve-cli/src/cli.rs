//! CLI argument definitions and parsing.

use clap::Parser;
use linesieve_domain::{DisplayMode, KeepPolicy};
use std::path::PathBuf;

/// linesieve - Keep or drop lines of text by asking an LLM a yes/no question.
///
/// Reads lines from a file or stdin, asks the question about each non-empty
/// line, and writes the lines that pass to a file or stdout.
#[derive(Debug, Parser)]
#[command(name = "linesieve")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Question to ask the LLM for each line
    #[arg(
        short,
        long,
        conflicts_with = "question_file",
        required_unless_present = "question_file"
    )]
    pub question: Option<String>,

    /// Read the question from a file
    #[arg(long, value_name = "PATH")]
    pub question_file: Option<PathBuf>,

    /// Ollama model name [default: llama3.1:latest]
    #[arg(short, long, env = "LINESIEVE_MODEL")]
    pub model: Option<String>,

    /// Ollama API URL [default: http://localhost:11434]
    #[arg(long, env = "OLLAMA_URL")]
    pub ollama_url: Option<String>,

    /// Keep lines where the answer is 'yes' or 'no'
    #[arg(long, value_enum, default_value = "yes")]
    pub keep_if: KeepIfArg,

    /// Print all lines with a +/- keep indicator
    #[arg(long)]
    pub show_all: bool,

    /// Input file path (default: stdin)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Request timeout in seconds [default: 30]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Maximum lines classified at once; output order is unaffected [default: 1]
    #[arg(short = 'j', long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Configuration file path [default: ~/.linesieve/config.toml]
    #[arg(short, long, env = "LINESIEVE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Display mode selected by `--show-all`.
    pub fn display_mode(&self) -> DisplayMode {
        if self.show_all {
            DisplayMode::Annotate
        } else {
            DisplayMode::Filter
        }
    }
}

/// Keep policy argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KeepIfArg {
    /// Keep lines the LLM answered yes to
    Yes,
    /// Keep lines the LLM answered anything but yes to
    No,
}

impl From<KeepIfArg> for KeepPolicy {
    fn from(arg: KeepIfArg) -> Self {
        match arg {
            KeepIfArg::Yes => KeepPolicy::Affirmative,
            KeepIfArg::No => KeepPolicy::Negative,
        }
    }
}
