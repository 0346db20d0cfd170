/// Error raised by the pattern engine.
///
/// Only caller-supplied (`custom`) patterns can produce these; the built-in
/// catalog patterns are compiled once and covered by tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// The pattern is not well-formed in the matching dialect.
    #[error("invalid pattern `{pattern}`: {reason}")]
    Invalid { pattern: String, reason: String },

    /// The matcher gave up while evaluating input (e.g. backtrack limit hit).
    #[error("pattern `{pattern}` failed while matching: {reason}")]
    Runtime { pattern: String, reason: String },
}

impl PatternError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Invalid { .. } => "PATTERN_INVALID",
            Self::Runtime { .. } => "PATTERN_RUNTIME",
        }
    }

    /// The pattern source the error refers to.
    #[must_use]
    pub fn pattern(&self) -> &str {
        match self {
            Self::Invalid { pattern, .. } | Self::Runtime { pattern, .. } => pattern,
        }
    }
}
