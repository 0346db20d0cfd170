use serde::{Deserialize, Serialize};
use smartfield_validator::{ValidationRule, evaluate};

/// The three-way state a field shows to the user.
///
/// Never set directly: it is always derived from the current text and the
/// current rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackMode {
    /// Text is empty; no highlight, no error text.
    #[default]
    Neutral,
    /// Text is non-empty and fails the rule.
    Invalid,
    /// Text is non-empty and passes the rule.
    Valid,
}

/// Border/shadow treatment requested from the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    #[default]
    Normal,
    Warning,
    Success,
}

impl FeedbackMode {
    #[must_use]
    pub fn highlight(self) -> Highlight {
        match self {
            Self::Neutral => Highlight::Normal,
            Self::Invalid => Highlight::Warning,
            Self::Valid => Highlight::Success,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Invalid => "invalid",
            Self::Valid => "valid",
        }
    }
}

/// Everything the presentation layer needs to render a field's validity.
///
/// `error_message` is `Some` exactly when `mode` is [`FeedbackMode::Invalid`],
/// so an error is never shown next to the success highlight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub mode: FeedbackMode,
    /// Validity reported to observers. For empty text this is whether the
    /// rule accepts the empty string, while `mode` stays neutral.
    pub is_valid: bool,
    pub error_message: Option<String>,
}

impl Feedback {
    /// Derives the feedback for `text` under `rule`.
    ///
    /// Empty text short-circuits to [`FeedbackMode::Neutral`] without running
    /// the matcher.
    #[must_use]
    pub fn resolve(text: &str, rule: &ValidationRule) -> Self {
        if text.is_empty() {
            return Self {
                mode: FeedbackMode::Neutral,
                is_valid: rule.accepts_empty(),
                error_message: None,
            };
        }

        let verdict = evaluate(text, rule);
        Self {
            mode: if verdict.is_valid {
                FeedbackMode::Valid
            } else {
                FeedbackMode::Invalid
            },
            is_valid: verdict.is_valid,
            error_message: verdict.error_message,
        }
    }

    #[must_use]
    pub fn highlight(&self) -> Highlight {
        self.mode.highlight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_text_is_neutral_without_error() {
        let feedback = Feedback::resolve("", &ValidationRule::NonEmpty);
        assert_eq!(feedback.mode, FeedbackMode::Neutral);
        assert_eq!(feedback.error_message, None);
        assert!(!feedback.is_valid);
        assert_eq!(feedback.highlight(), Highlight::Normal);
    }

    #[test]
    fn empty_text_reports_rule_acceptance() {
        assert!(Feedback::resolve("", &ValidationRule::None).is_valid);
        assert!(Feedback::resolve("", &ValidationRule::DecimalNumber).is_valid);
        assert!(!Feedback::resolve("", &ValidationRule::Email).is_valid);
    }

    #[test]
    fn invalid_text_carries_message_and_warning() {
        let feedback = Feedback::resolve("bad", &ValidationRule::Email);
        assert_eq!(
            feedback,
            Feedback {
                mode: FeedbackMode::Invalid,
                is_valid: false,
                error_message: Some("Email is invalid".into()),
            }
        );
        assert_eq!(feedback.highlight(), Highlight::Warning);
    }

    #[test]
    fn valid_text_clears_message() {
        let feedback = Feedback::resolve("a@b.co", &ValidationRule::Email);
        assert_eq!(feedback.mode, FeedbackMode::Valid);
        assert_eq!(feedback.error_message, None);
        assert_eq!(feedback.highlight(), Highlight::Success);
    }
}
