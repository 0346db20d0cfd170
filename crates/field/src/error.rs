use chrono::NaiveDate;
use smartfield_validator::PatternError;

/// Error type for field and form operations.
///
/// Empty or invalid text is never an error; it is reported through
/// [`Feedback`](crate::Feedback). These cover misuse and bad configuration.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    /// A custom rule's pattern did not compile.
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// A list-picker row outside the option list was selected.
    #[error("option {index} out of range for field `{field}` with {len} options")]
    OptionOutOfRange {
        field: String,
        index: usize,
        len: usize,
    },

    /// A picker operation was used on a field of another kind.
    #[error("field `{field}` is not a {expected} picker")]
    NotAPicker {
        field: String,
        expected: &'static str,
    },

    /// A date earlier than the picker's minimum was selected.
    #[error("date {date} is before {minimum}, the earliest allowed for field `{field}`")]
    DateBeforeMinimum {
        field: String,
        date: NaiveDate,
        minimum: NaiveDate,
    },

    /// Keystroke input was sent to a field fed by a picker.
    #[error("field `{field}` takes its text from a picker; typed input is rejected")]
    TypedInputRejected { field: String },

    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("duplicate field `{0}` in form schema")]
    DuplicateField(String),

    /// The form schema could not be parsed.
    #[error("invalid form schema: {0}")]
    Schema(#[from] serde_json::Error),
}

impl FieldError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Pattern(e) => e.code(),
            Self::OptionOutOfRange { .. } => "FIELD_OPTION_OUT_OF_RANGE",
            Self::NotAPicker { .. } => "FIELD_NOT_A_PICKER",
            Self::DateBeforeMinimum { .. } => "FIELD_DATE_BEFORE_MINIMUM",
            Self::TypedInputRejected { .. } => "FIELD_TYPED_INPUT_REJECTED",
            Self::UnknownField(_) => "FIELD_UNKNOWN",
            Self::DuplicateField(_) => "FIELD_DUPLICATE",
            Self::Schema(_) => "FIELD_SCHEMA",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_errors_keep_their_code() {
        let err: FieldError = PatternError::Invalid {
            pattern: "[".into(),
            reason: "unclosed class".into(),
        }
        .into();
        assert_eq!(err.code(), "PATTERN_INVALID");
        assert_eq!(err.to_string(), "invalid pattern `[`: unclosed class");
    }

    #[test]
    fn display_messages() {
        let err = FieldError::OptionOutOfRange {
            field: "size".into(),
            index: 3,
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "option 3 out of range for field `size` with 2 options"
        );
        assert_eq!(err.code(), "FIELD_OPTION_OUT_OF_RANGE");
    }
}
