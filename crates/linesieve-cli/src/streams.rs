//! Input and output stream selection.

use crate::error::{CliError, Result};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncWrite, BufReader, BufWriter};

/// Line source: a file or stdin.
pub type Input = Box<dyn AsyncBufRead + Unpin + Send>;

/// Line sink: a file or stdout.
pub type Output = Box<dyn AsyncWrite + Unpin + Send>;

/// Open `path` for reading, or stdin when `None`.
pub async fn open_input(path: Option<&Path>) -> Result<Input> {
    match path {
        Some(path) => {
            let file = File::open(path).await.map_err(|e| {
                CliError::Config(format!("Error opening input file {}: {}", path.display(), e))
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(tokio::io::stdin()))),
    }
}

/// Create (or truncate) `path` for writing, or stdout when `None`.
pub async fn open_output(path: Option<&Path>) -> Result<Output> {
    match path {
        Some(path) => {
            let file = File::create(path).await.map_err(|e| {
                CliError::Config(format!("Error creating output file {}: {}", path.display(), e))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(tokio::io::stdout()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt};

    #[tokio::test]
    async fn test_open_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.txt");
        std::fs::write(&path, "first\nsecond\n").unwrap();

        let input = open_input(Some(&path)).await.unwrap();
        let mut lines = input.lines();
        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("first"));
        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("second"));
        assert_eq!(lines.next_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_open_missing_input_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = open_input(Some(&dir.path().join("missing.txt"))).await;
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[tokio::test]
    async fn test_open_output_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "stale contents\n").unwrap();

        let mut output = open_output(Some(&path)).await.unwrap();
        output.write_all(b"fresh\n").await.unwrap();
        output.flush().await.unwrap();
        drop(output);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[tokio::test]
    async fn test_open_output_in_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let result = open_output(Some(&dir.path().join("nope").join("out.txt"))).await;
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
