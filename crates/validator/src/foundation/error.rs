//! Error types for validation failures
//!
//! Codes and messages are `Cow<'static, str>` so the built-in rules, whose
//! texts are compile-time constants, never allocate on failure.

use std::borrow::Cow;
use std::fmt;

/// A structured validation failure.
///
/// `code` is the failing rule's name (e.g. `"email"`); `message` is the text
/// shown next to the field, unchanged.
///
/// # Examples
///
/// ```rust
/// use smartfield_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("email", "Email is invalid");
/// assert_eq!(error.code, "email");
/// assert_eq!(error.to_string(), "email: Email is invalid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub code: Cow<'static, str>,
    pub message: Cow<'static, str>,
    /// Diagnostic context, e.g. the matcher failure behind a rejection.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: Vec::new(),
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v.as_ref()))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        let mut params = self.params.iter();
        if let Some((k, v)) = params.next() {
            write!(f, " ({k}={v}")?;
            for (k, v) in params {
                write!(f, ", {k}={v}")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
