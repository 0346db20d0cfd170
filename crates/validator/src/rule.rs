//! The rule catalog.
//!
//! Every [`ValidationRule`] pairs a full-string pattern with the message shown
//! when the pattern does not match. All variants except
//! [`ValidationRule::Custom`] are fixed at compile time.

use std::borrow::Cow;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::PatternError;
use crate::foundation::{Validate, ValidationError, ValidationResult};
use crate::pattern::Pattern;

// ============================================================================
// CATALOG DATA
// ============================================================================

/// Matches anything, including multi-line text.
pub const NONE_PATTERN: &str = "(?s:.*)";
/// Rejects empty and whitespace-only text.
pub const NON_EMPTY_PATTERN: &str = r"(?s:(?!\s*$).+)";
pub const EMAIL_PATTERN: &str = r"[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}";
pub const FULL_NAME_PATTERN: &str = "[A-Za-z ]+";
pub const ADDRESS_PATTERN: &str = "[A-Za-z0-9 .'_-]+";
/// At least 5 characters with a lowercase letter, an uppercase letter and one
/// of `$@#^!%*?&`.
pub const PASSWORD_PATTERN: &str =
    "(?=.*[a-z])(?=.*[A-Z])(?=.*[$@#^!%*?&])[A-Za-z0-9$@#^!%*?&]{5,}";
pub const NUMBER_PATTERN: &str = "[0-9]+";
/// Accepts the empty string as well; see [`ValidationRule::accepts_empty`].
pub const DECIMAL_NUMBER_PATTERN: &str = r"(?:0|[1-9][0-9]*)?(?:\.[0-9]*)?";
/// Only the first ten characters are constrained.
pub const PHONE_NUMBER_PATTERN: &str = "[0-9]{10}(?s:.*)";
/// Only the first five characters are constrained.
pub const ZIP_CODE_PATTERN: &str = "[0-9]{5}(?s:.*)";

pub const NON_EMPTY_MESSAGE: &str = "This field cannot be empty";
pub const EMAIL_MESSAGE: &str = "Email is invalid";
pub const FULL_NAME_MESSAGE: &str = "Invalid name";
pub const ADDRESS_MESSAGE: &str = "Invalid address";
pub const PASSWORD_MESSAGE: &str = "8 letters with capital, number & special character";
pub const NUMBER_MESSAGE: &str = "Invalid number";
pub const PHONE_NUMBER_MESSAGE: &str = "Invalid phone number";
pub const ZIP_CODE_MESSAGE: &str = "Invalid zip code";

fn builtin(source: &'static str) -> Pattern {
    Pattern::new(source).expect("built-in catalog pattern compiles")
}

static NONE: LazyLock<Pattern> = LazyLock::new(|| builtin(NONE_PATTERN));
static NON_EMPTY: LazyLock<Pattern> = LazyLock::new(|| builtin(NON_EMPTY_PATTERN));
static EMAIL: LazyLock<Pattern> = LazyLock::new(|| builtin(EMAIL_PATTERN));
static FULL_NAME: LazyLock<Pattern> = LazyLock::new(|| builtin(FULL_NAME_PATTERN));
static ADDRESS: LazyLock<Pattern> = LazyLock::new(|| builtin(ADDRESS_PATTERN));
static PASSWORD: LazyLock<Pattern> = LazyLock::new(|| builtin(PASSWORD_PATTERN));
static NUMBER: LazyLock<Pattern> = LazyLock::new(|| builtin(NUMBER_PATTERN));
static DECIMAL_NUMBER: LazyLock<Pattern> = LazyLock::new(|| builtin(DECIMAL_NUMBER_PATTERN));
static PHONE_NUMBER: LazyLock<Pattern> = LazyLock::new(|| builtin(PHONE_NUMBER_PATTERN));
static ZIP_CODE: LazyLock<Pattern> = LazyLock::new(|| builtin(ZIP_CODE_PATTERN));

// ============================================================================
// VALIDATION RULE
// ============================================================================

/// A validation rule: a full-string pattern plus the error message shown
/// when text does not match it.
///
/// # Examples
///
/// ```rust
/// use smartfield_validator::ValidationRule;
///
/// assert_eq!(ValidationRule::Email.message(), "Email is invalid");
/// assert!(ValidationRule::Email.matches("a@b.co").unwrap());
///
/// let sku = ValidationRule::custom("[A-Z]{3}-[0-9]{4}", "Invalid SKU").unwrap();
/// assert!(sku.matches("ABC-1234").unwrap());
/// assert_eq!(sku.message(), "Invalid SKU");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ValidationRule {
    /// No constraint; every input is valid and the message is empty.
    #[default]
    None,
    NonEmpty,
    Email,
    FullName,
    Address,
    Password,
    Number,
    ZipCode,
    DecimalNumber,
    PhoneNumber,
    /// Caller-supplied pattern and message, compiled at construction.
    Custom(CustomRule),
}

impl ValidationRule {
    /// Every fixed rule of the catalog, in declaration order.
    pub const BUILTIN: [Self; 10] = [
        Self::None,
        Self::NonEmpty,
        Self::Email,
        Self::FullName,
        Self::Address,
        Self::Password,
        Self::Number,
        Self::ZipCode,
        Self::DecimalNumber,
        Self::PhoneNumber,
    ];

    /// Builds a custom rule, failing fast when `pattern` is malformed.
    pub fn custom(
        pattern: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, PatternError> {
        CustomRule::new(pattern, message).map(Self::Custom)
    }

    /// Stable snake_case name, used as the error code and in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::NonEmpty => "non_empty",
            Self::Email => "email",
            Self::FullName => "full_name",
            Self::Address => "address",
            Self::Password => "password",
            Self::Number => "number",
            Self::ZipCode => "zip_code",
            Self::DecimalNumber => "decimal_number",
            Self::PhoneNumber => "phone_number",
            Self::Custom(_) => "custom",
        }
    }

    /// The compiled pattern text must fully match.
    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        match self {
            Self::None => &*NONE,
            Self::NonEmpty => &*NON_EMPTY,
            Self::Email => &*EMAIL,
            Self::FullName => &*FULL_NAME,
            Self::Address => &*ADDRESS,
            Self::Password => &*PASSWORD,
            Self::Number => &*NUMBER,
            Self::ZipCode => &*ZIP_CODE,
            Self::DecimalNumber => &*DECIMAL_NUMBER,
            Self::PhoneNumber => &*PHONE_NUMBER,
            Self::Custom(custom) => &custom.pattern,
        }
    }

    /// The error message shown when text fails this rule.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Custom(custom) => &custom.message,
            _ => self.static_message(),
        }
    }

    fn static_message(&self) -> &'static str {
        match self {
            Self::None | Self::Custom(_) => "",
            Self::NonEmpty => NON_EMPTY_MESSAGE,
            Self::Email => EMAIL_MESSAGE,
            Self::FullName => FULL_NAME_MESSAGE,
            Self::Address => ADDRESS_MESSAGE,
            Self::Password => PASSWORD_MESSAGE,
            Self::Number | Self::DecimalNumber => NUMBER_MESSAGE,
            Self::PhoneNumber => PHONE_NUMBER_MESSAGE,
            Self::ZipCode => ZIP_CODE_MESSAGE,
        }
    }

    /// Whether the empty string satisfies this rule.
    ///
    /// Constant per rule: `none` and `decimal_number` accept it, custom rules
    /// record the answer when they are built.
    #[must_use]
    pub fn accepts_empty(&self) -> bool {
        match self {
            Self::None | Self::DecimalNumber => true,
            Self::Custom(custom) => custom.accepts_empty,
            Self::NonEmpty
            | Self::Email
            | Self::FullName
            | Self::Address
            | Self::Password
            | Self::Number
            | Self::ZipCode
            | Self::PhoneNumber => false,
        }
    }

    /// Whether the whole of `text` matches this rule's pattern.
    pub fn matches(&self, text: &str) -> Result<bool, PatternError> {
        self.pattern().is_full_match(text)
    }

    /// The failure reported for text that does not match.
    #[must_use]
    pub fn error(&self) -> ValidationError {
        let message: Cow<'static, str> = match self {
            Self::Custom(custom) => Cow::Owned(custom.message.clone()),
            _ => Cow::Borrowed(self.static_message()),
        };
        ValidationError::new(self.name(), message)
    }
}

impl Validate for ValidationRule {
    type Input = str;

    fn validate(&self, input: &str) -> ValidationResult<()> {
        match self.matches(input) {
            Ok(true) => {
                tracing::trace!(rule = self.name(), len = input.len(), "rule matched");
                Ok(())
            }
            Ok(false) => {
                tracing::trace!(rule = self.name(), len = input.len(), "rule rejected input");
                Err(self.error())
            }
            Err(e) => {
                tracing::warn!(rule = self.name(), error = %e, "matcher aborted, treating input as invalid");
                Err(self.error().with_param("matcher_error", e.to_string()))
            }
        }
    }
}

// ============================================================================
// CUSTOM RULE
// ============================================================================

/// Payload of [`ValidationRule::Custom`].
///
/// Serializes as `{ "pattern": ..., "message": ... }`; deserializing compiles
/// the pattern, so malformed configuration is rejected at load time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CustomRuleSpec", into = "CustomRuleSpec")]
pub struct CustomRule {
    pattern: Pattern,
    message: String,
    accepts_empty: bool,
}

impl CustomRule {
    /// Compiles `pattern` and pairs it with `message`.
    pub fn new(pattern: impl Into<String>, message: impl Into<String>) -> Result<Self, PatternError> {
        let pattern = Pattern::new(pattern)?;
        let accepts_empty = pattern.is_full_match("").unwrap_or(false);
        Ok(Self {
            pattern,
            message: message.into(),
            accepts_empty,
        })
    }

    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Serialize, Deserialize)]
struct CustomRuleSpec {
    pattern: String,
    message: String,
}

impl TryFrom<CustomRuleSpec> for CustomRule {
    type Error = PatternError;

    fn try_from(spec: CustomRuleSpec) -> Result<Self, Self::Error> {
        Self::new(spec.pattern, spec.message)
    }
}

impl From<CustomRule> for CustomRuleSpec {
    fn from(rule: CustomRule) -> Self {
        Self {
            pattern: rule.pattern.as_str().to_owned(),
            message: rule.message,
        }
    }
}
