//! Behaviour of every fixed rule against representative inputs.

use pretty_assertions::assert_eq;
use rstest::rstest;
use smartfield_validator::prelude::*;

fn check(rule: &ValidationRule, text: &str, expected: bool) {
    let verdict = evaluate(text, rule);
    assert_eq!(
        verdict.is_valid,
        expected,
        "rule `{}` on {text:?}",
        rule.name()
    );
    if expected {
        assert_eq!(verdict.error_message, None);
    } else {
        assert_eq!(verdict.error_message.as_deref(), Some(rule.message()));
    }
}

#[rstest]
#[case("a@b.co", true)]
#[case("user.name+tag@mail.example.org", true)]
#[case("UPPER_case%1@host-name.io", true)]
#[case("not-an-email", false)]
#[case("a@b", false)]
#[case("a@b.c", false)]
#[case("@b.co", false)]
#[case("a@b.co1", false)]
#[case("a @b.co", false)]
#[case("", false)]
fn email(#[case] text: &str, #[case] expected: bool) {
    check(&ValidationRule::Email, text, expected);
}

#[test]
fn email_message() {
    assert_eq!(
        evaluate("not-an-email", &ValidationRule::Email).error_message.as_deref(),
        Some("Email is invalid")
    );
}

#[rstest]
#[case("John Smith", true)]
#[case("a", true)]
#[case(" ", true)]
#[case("", false)]
#[case("John3", false)]
#[case("Jean-Luc", false)]
fn full_name(#[case] text: &str, #[case] expected: bool) {
    check(&ValidationRule::FullName, text, expected);
}

#[rstest]
#[case("221B Baker St.", true)]
#[case("O'Neil-Street_5", true)]
#[case("Springfield", true)]
#[case("Main St, 5", false)]
#[case("Apt #4", false)]
#[case("", false)]
fn address(#[case] text: &str, #[case] expected: bool) {
    check(&ValidationRule::Address, text, expected);
}

#[rstest]
#[case("Abc12!", true)]
#[case("Ab!cd", true)]
#[case("P@ssw0rd", true)]
#[case("abcdef", false)]
#[case("ABCDE!", false)]
#[case("Abcdef", false)]
#[case("Ab!1", false)]
#[case("Abc de!", false)]
#[case("Abc12!~", false)]
#[case("", false)]
fn password(#[case] text: &str, #[case] expected: bool) {
    check(&ValidationRule::Password, text, expected);
}

#[rstest]
#[case("0", true)]
#[case("007", true)]
#[case("1234567890123", true)]
#[case("12a", false)]
#[case("-1", false)]
#[case("1.5", false)]
#[case("", false)]
fn number(#[case] text: &str, #[case] expected: bool) {
    check(&ValidationRule::Number, text, expected);
}

#[rstest]
#[case("", true)]
#[case("0", true)]
#[case("0.5", true)]
#[case(".5", true)]
#[case("12.", true)]
#[case("12.34", true)]
#[case("012", false)]
#[case("00", false)]
#[case("1.2.3", false)]
#[case("abc", false)]
#[case("-1", false)]
fn decimal_number(#[case] text: &str, #[case] expected: bool) {
    check(&ValidationRule::DecimalNumber, text, expected);
}

#[rstest]
#[case("1234567890", true)]
#[case("12345678901", true)]
#[case("1234567890 ext. 5", true)]
#[case("123", false)]
#[case("123456789a", false)]
#[case("(123) 456-7890", false)]
#[case("", false)]
fn phone_number(#[case] text: &str, #[case] expected: bool) {
    check(&ValidationRule::PhoneNumber, text, expected);
}

#[rstest]
#[case("12345", true)]
#[case("12345-6789", true)]
#[case("1234", false)]
#[case("abcde", false)]
#[case("", false)]
fn zip_code(#[case] text: &str, #[case] expected: bool) {
    check(&ValidationRule::ZipCode, text, expected);
}

#[rstest]
#[case("a", true)]
#[case(" a ", true)]
#[case("line\nbreak", true)]
#[case("", false)]
#[case("   ", false)]
#[case("\t\n", false)]
fn non_empty(#[case] text: &str, #[case] expected: bool) {
    check(&ValidationRule::NonEmpty, text, expected);
}

#[test]
fn non_empty_message_on_empty_text() {
    assert_eq!(
        evaluate("", &ValidationRule::NonEmpty),
        Verdict::invalid("This field cannot be empty")
    );
}

#[rstest]
#[case("")]
#[case("anything at all")]
#[case("multi\nline\ntext")]
fn none_always_valid(#[case] text: &str) {
    check(&ValidationRule::None, text, true);
}

#[test]
fn empty_text_fails_every_rule_that_requires_content() {
    for rule in ValidationRule::BUILTIN {
        let expected = matches!(rule, ValidationRule::None | ValidationRule::DecimalNumber);
        assert_eq!(evaluate("", &rule).is_valid, expected, "rule `{}`", rule.name());
    }
}

#[test]
fn custom_rule_failure_does_not_affect_other_rules() {
    let custom = ValidationRule::custom("[0-9]{3}-[0-9]{2}", "Use 000-00").unwrap();
    assert_eq!(evaluate("12-345", &custom), Verdict::invalid("Use 000-00"));
    assert!(evaluate("a@b.co", &ValidationRule::Email).is_valid);
}

#[test]
fn evaluation_is_safe_across_threads() {
    let rules = ValidationRule::BUILTIN;
    std::thread::scope(|scope| {
        for rule in &rules {
            scope.spawn(move || {
                for _ in 0..100 {
                    let first = evaluate("1234567890", rule);
                    let second = evaluate("1234567890", rule);
                    assert_eq!(first, second);
                }
            });
        }
    });
}
