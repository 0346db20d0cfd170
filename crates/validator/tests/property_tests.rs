//! Property-based tests for smartfield-validator.

use proptest::prelude::*;
use smartfield_validator::prelude::*;

fn builtin_rule() -> impl Strategy<Value = ValidationRule> {
    prop::sample::select(ValidationRule::BUILTIN.to_vec())
}

// ============================================================================
// IDEMPOTENCY: evaluate(x) == evaluate(x)
// ============================================================================

proptest! {
    #[test]
    fn evaluate_idempotent(rule in builtin_rule(), s in ".{0,40}") {
        prop_assert_eq!(evaluate(&s, &rule), evaluate(&s, &rule));
    }
}

// ============================================================================
// VERDICT SHAPE: message present iff invalid, and it is the rule's message
// ============================================================================

proptest! {
    #[test]
    fn verdict_message_iff_invalid(rule in builtin_rule(), s in ".{0,40}") {
        let verdict = evaluate(&s, &rule);
        if verdict.is_valid {
            prop_assert!(verdict.error_message.is_none());
        } else {
            prop_assert_eq!(verdict.error_message.as_deref(), Some(rule.message()));
        }
    }

    #[test]
    fn validate_trait_agrees_with_evaluate(rule in builtin_rule(), s in ".{0,40}") {
        prop_assert_eq!(rule.validate(&s).is_ok(), evaluate(&s, &rule).is_valid);
    }
}

// ============================================================================
// RULE-SPECIFIC LAWS
// ============================================================================

proptest! {
    #[test]
    fn none_accepts_everything(s in "(?s).{0,60}") {
        prop_assert!(evaluate(&s, &ValidationRule::None).is_valid);
    }

    #[test]
    fn number_accepts_digit_strings(s in "[0-9]{1,20}") {
        prop_assert!(evaluate(&s, &ValidationRule::Number).is_valid);
    }

    #[test]
    fn phone_only_checks_first_ten_digits(digits in "[0-9]{10}", tail in ".{0,10}") {
        let text = format!("{digits}{tail}");
        prop_assert!(evaluate(&text, &ValidationRule::PhoneNumber).is_valid);
    }

    #[test]
    fn zip_rejects_short_digit_runs(s in "[0-9]{0,4}") {
        prop_assert!(!evaluate(&s, &ValidationRule::ZipCode).is_valid);
    }

    #[test]
    fn simple_emails_are_accepted(
        local in "[a-z0-9._%+-]{1,10}",
        domain in "[a-z0-9-]{1,10}",
        tld in "[a-z]{2,6}",
    ) {
        let text = format!("{local}@{domain}.{tld}");
        prop_assert!(evaluate(&text, &ValidationRule::Email).is_valid);
    }

    #[test]
    fn whitespace_never_passes_non_empty(s in "[ \t\n\r]{0,10}") {
        prop_assert!(!evaluate(&s, &ValidationRule::NonEmpty).is_valid);
    }
}
