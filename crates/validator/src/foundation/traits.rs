//! Core trait for the validation system

use crate::foundation::ValidationResult;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Generic over the input type so a validator can only be applied to the
/// values it understands. Failures carry a
/// [`ValidationError`](crate::foundation::ValidationError).
///
/// # Examples
///
/// ```rust
/// use smartfield_validator::foundation::{Validate, ValidationError, ValidationResult};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> ValidationResult<()> {
///         if input.contains(' ') {
///             Err(ValidationError::new("no_spaces", "Spaces are not allowed"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate("alice").is_ok());
/// assert!(NoSpaces.validate("al ice").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> ValidationResult<()>;

    /// Convenience wrapper returning only the pass/fail bit.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult<()> {
        (**self).validate(input)
    }
}
