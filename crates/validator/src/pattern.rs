//! Anchored pattern engine.
//!
//! Patterns are written in the `fancy-regex` dialect (character classes,
//! quantifiers, alternation, lookahead) and always match the *whole* input:
//! `Pattern::new("[0-9]+")` accepts `"123"` but rejects `"123a"`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use fancy_regex::Regex;

use crate::error::PatternError;

/// A compiled, full-string-anchored pattern.
///
/// Cheap to clone; the compiled matcher is shared. Matching holds no mutable
/// state, so a `Pattern` can be used from several threads at once.
///
/// # Examples
///
/// ```rust
/// use smartfield_validator::Pattern;
///
/// let digits = Pattern::new("[0-9]+").unwrap();
/// assert!(digits.is_full_match("2024").unwrap());
/// assert!(!digits.is_full_match("2024a").unwrap());
///
/// assert!(Pattern::new("[0-9").is_err());
/// ```
#[derive(Clone)]
pub struct Pattern {
    source: Arc<str>,
    anchored: Arc<Regex>,
}

impl Pattern {
    /// Compiles `source`, failing fast when it is not well-formed.
    pub fn new(source: impl Into<String>) -> Result<Self, PatternError> {
        let source: String = source.into();

        // The bare source must compile on its own, otherwise a stray `)` could
        // close the anchoring group and leak an unanchored alternative.
        Regex::new(&source).map_err(|e| invalid(&source, &e))?;
        // A verbose-mode `#` comment at the end would swallow the closing
        // group; a newline ends the comment first.
        let anchored = Regex::new(&format!("^(?:{source})$"))
            .or_else(|_| Regex::new(&format!("^(?:{source}\n)$")))
            .map_err(|e| invalid(&source, &e))?;

        Ok(Self {
            source: source.into(),
            anchored: Arc::new(anchored),
        })
    }

    /// The pattern as written, without the anchors added at compile time.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns whether the entire `text` matches.
    ///
    /// Fails only when the matcher aborts (backtrack limit), which can only
    /// happen for pathological caller-supplied patterns.
    pub fn is_full_match(&self, text: &str) -> Result<bool, PatternError> {
        self.anchored
            .is_match(text)
            .map_err(|e| PatternError::Runtime {
                pattern: self.source.to_string(),
                reason: e.to_string(),
            })
    }
}

fn invalid(source: &str, error: &fancy_regex::Error) -> PatternError {
    PatternError::Invalid {
        pattern: source.to_owned(),
        reason: error.to_string(),
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&&*self.source).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

impl Hash for Pattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
    }
}

impl TryFrom<&str> for Pattern {
    type Error = PatternError;

    fn try_from(source: &str) -> Result<Self, Self::Error> {
        Self::new(source)
    }
}
