//! Interpret free-form backend answers as yes/no

/// Answers recognized as "yes" (after trimming and lower-casing)
pub const AFFIRMATIVE_ANSWERS: [&str; 6] = ["yes", "y", "true", "1", "correct", "affirmative"];

/// Answers recognized as "no" (after trimming and lower-casing)
pub const NEGATIVE_ANSWERS: [&str; 6] = ["no", "n", "false", "0", "incorrect", "negative"];

/// How a raw answer was understood
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Matched one of [`AFFIRMATIVE_ANSWERS`]
    Affirmative,
    /// Matched one of [`NEGATIVE_ANSWERS`]
    Negative,
    /// Matched neither set
    Unrecognized,
}

impl Answer {
    /// Fold into a classification. Unrecognized counts as "no".
    pub fn as_bool(self) -> bool {
        matches!(self, Answer::Affirmative)
    }
}

/// Interpret a raw answer without folding the unrecognized case
///
/// Matching is exact on the normalized text, never substring.
pub fn interpret_answer(raw: &str) -> Answer {
    let normalized = raw.trim().to_lowercase();

    if AFFIRMATIVE_ANSWERS.contains(&normalized.as_str()) {
        Answer::Affirmative
    } else if NEGATIVE_ANSWERS.contains(&normalized.as_str()) {
        Answer::Negative
    } else {
        Answer::Unrecognized
    }
}

/// Normalize a raw answer into a classification
///
/// Anything that is not a recognized "yes" is `false`.
pub fn normalize_answer(raw: &str) -> bool {
    interpret_answer(raw).as_bool()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_affirmative_answers() {
        for answer in AFFIRMATIVE_ANSWERS {
            assert!(normalize_answer(answer), "{answer} should be affirmative");
            assert!(normalize_answer(&answer.to_uppercase()));
        }
    }

    #[test]
    fn test_negative_answers() {
        for answer in NEGATIVE_ANSWERS {
            assert!(!normalize_answer(answer));
            assert_eq!(interpret_answer(answer), Answer::Negative);
        }
    }

    #[test]
    fn test_whitespace_and_case() {
        assert!(normalize_answer(" YES \n"));
        assert!(normalize_answer("Affirmative"));
        assert!(normalize_answer("\tTrue"));
    }

    #[test]
    fn test_unrecognized_defaults_to_false() {
        assert!(!normalize_answer("I think maybe"));
        assert!(!normalize_answer(""));
        assert_eq!(interpret_answer("I think maybe"), Answer::Unrecognized);
        assert_eq!(interpret_answer(""), Answer::Unrecognized);
    }

    #[test]
    fn test_no_substring_matching() {
        assert_eq!(interpret_answer("Yes."), Answer::Unrecognized);
        assert_eq!(interpret_answer("yes, it is"), Answer::Unrecognized);
        assert_eq!(interpret_answer("oui"), Answer::Unrecognized);
        assert!(!normalize_answer("Yes."));
    }

    proptest! {
        #[test]
        fn interpret_agrees_with_normalize(raw in ".*") {
            prop_assert_eq!(interpret_answer(&raw) == Answer::Affirmative, normalize_answer(&raw));
        }

        #[test]
        fn padding_does_not_matter(idx in 0usize..6, pad in "[ \t\n]{0,4}") {
            let raw = format!("{pad}{}{pad}", AFFIRMATIVE_ANSWERS[idx].to_uppercase());
            prop_assert!(normalize_answer(&raw));
        }
    }
}
