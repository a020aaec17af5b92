//! Keep policy and display mode
//!
//! Both are fixed for the whole run. The keep policy decides whether a
//! classified line is retained; the display mode decides what gets written.

use std::fmt;

/// Rule mapping a classification to a keep/drop decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeepPolicy {
    /// Keep lines the backend answered "yes" to
    #[default]
    Affirmative,
    /// Keep lines the backend answered "no" to (or did not answer clearly)
    Negative,
}

impl KeepPolicy {
    /// Decide whether a line with the given classification is kept
    pub fn should_keep(self, classification: bool) -> bool {
        match self {
            KeepPolicy::Affirmative => classification,
            KeepPolicy::Negative => !classification,
        }
    }

    /// The answer word this policy keeps on
    pub fn as_str(&self) -> &'static str {
        match self {
            KeepPolicy::Affirmative => "yes",
            KeepPolicy::Negative => "no",
        }
    }
}

impl fmt::Display for KeepPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the filter writes for each classified line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    /// Emit kept lines only, unannotated
    #[default]
    Filter,
    /// Emit every line prefixed with `+` (kept) or `-` (dropped)
    Annotate,
}

impl DisplayMode {
    /// Render a classified line, or `None` when nothing should be written
    pub fn render(self, line: &str, keep: bool) -> Option<String> {
        match self {
            DisplayMode::Annotate => {
                let marker = if keep { '+' } else { '-' };
                Some(format!("{marker}{line}"))
            }
            DisplayMode::Filter if keep => Some(line.to_string()),
            DisplayMode::Filter => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_affirmative_policy() {
        assert!(KeepPolicy::Affirmative.should_keep(true));
        assert!(!KeepPolicy::Affirmative.should_keep(false));
    }

    #[test]
    fn test_negative_policy_inverts() {
        assert!(!KeepPolicy::Negative.should_keep(true));
        assert!(KeepPolicy::Negative.should_keep(false));
    }

    #[test]
    fn test_default_policy_keeps_yes() {
        assert_eq!(KeepPolicy::default(), KeepPolicy::Affirmative);
        assert_eq!(KeepPolicy::default().to_string(), "yes");
    }

    #[test]
    fn test_filter_mode_render() {
        assert_eq!(DisplayMode::Filter.render("Python", true), Some("Python".to_string()));
        assert_eq!(DisplayMode::Filter.render("English", false), None);
    }

    #[test]
    fn test_annotate_mode_render() {
        assert_eq!(DisplayMode::Annotate.render("Python", true), Some("+Python".to_string()));
        assert_eq!(DisplayMode::Annotate.render("English", false), Some("-English".to_string()));
    }

    proptest! {
        #[test]
        fn annotate_always_emits(line in ".*", keep in any::<bool>()) {
            let rendered = DisplayMode::Annotate.render(&line, keep).unwrap();
            prop_assert_eq!(&rendered[1..], line.as_str());
        }

        #[test]
        fn policies_disagree(classification in any::<bool>()) {
            prop_assert_ne!(
                KeepPolicy::Affirmative.should_keep(classification),
                KeepPolicy::Negative.should_keep(classification)
            );
        }
    }
}
