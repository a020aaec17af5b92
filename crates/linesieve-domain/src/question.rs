//! Question module

use std::fmt;

/// The question asked of every line
///
/// Supplied once at startup and reused for the whole run.
/// Always non-empty once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Question(String);

/// Error returned when a question fails validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionError {
    /// The question was empty or contained only whitespace
    Empty,
}

impl fmt::Display for QuestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionError::Empty => write!(f, "question cannot be empty"),
        }
    }
}

impl std::error::Error for QuestionError {}

impl Question {
    /// Create a new question
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    /// Returns [`QuestionError::Empty`] if nothing is left after trimming
    pub fn new(value: impl AsRef<str>) -> Result<Self, QuestionError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(QuestionError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get question as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Question {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::new("Is this a programming language?").unwrap();
        assert_eq!(q.as_str(), "Is this a programming language?");
    }

    #[test]
    fn test_question_is_trimmed() {
        let q = Question::new("  Is it red?\n").unwrap();
        assert_eq!(q.as_str(), "Is it red?");
        assert_eq!(q.to_string(), "Is it red?");
    }

    #[test]
    fn test_empty_question_rejected() {
        assert_eq!(Question::new(""), Err(QuestionError::Empty));
        assert_eq!(Question::new(" \t\n"), Err(QuestionError::Empty));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(QuestionError::Empty.to_string(), "question cannot be empty");
    }
}
