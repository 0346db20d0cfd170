//! Evaluating text against a rule.

use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationResult};
use crate::rule::ValidationRule;

/// Outcome of one evaluation: pass/fail plus the rule's message on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub is_valid: bool,
    pub error_message: Option<String>,
}

impl Verdict {
    #[must_use]
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: None,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message.into()),
        }
    }
}

impl From<ValidationResult<()>> for Verdict {
    fn from(result: ValidationResult<()>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(error) => Self::invalid(error.message),
        }
    }
}

/// Matches the whole of `text` against `rule`.
///
/// Never panics: a matcher failure on a custom pattern is logged and reported
/// as an ordinary failure carrying the rule's message.
///
/// # Examples
///
/// ```rust
/// use smartfield_validator::{ValidationRule, Verdict, evaluate};
///
/// assert_eq!(evaluate("a@b.co", &ValidationRule::Email), Verdict::valid());
/// assert_eq!(
///     evaluate("not-an-email", &ValidationRule::Email),
///     Verdict::invalid("Email is invalid"),
/// );
/// ```
pub fn evaluate(text: &str, rule: &ValidationRule) -> Verdict {
    rule.validate(text).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationError;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_message_for_none_rule_is_never_surfaced() {
        assert_eq!(evaluate("", &ValidationRule::None), Verdict::valid());
        assert_eq!(evaluate("line\nbreak", &ValidationRule::None), Verdict::valid());
    }

    #[test]
    fn custom_message_is_used_verbatim() {
        let rule = ValidationRule::custom("[A-Z]{2}", "Two capitals please").unwrap();
        assert_eq!(evaluate("ab", &rule), Verdict::invalid("Two capitals please"));
        assert_eq!(evaluate("AB", &rule), Verdict::valid());
    }

    #[test]
    fn from_result() {
        assert_eq!(Verdict::from(Ok::<(), ValidationError>(())), Verdict::valid());
        let err = ValidationError::new("number", "Invalid number");
        assert_eq!(Verdict::from(Err(err)), Verdict::invalid("Invalid number"));
    }
}
