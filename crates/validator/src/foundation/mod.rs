//! Core validation types and traits
//!
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ValidationError`]
//!
//! Every rule in the catalog implements [`Validate`] over `str`, so a
//! [`ValidationRule`](crate::ValidationRule) can be handed to any code that
//! expects a generic validator.

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::Validate;

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod core_tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> ValidationResult<()> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> ValidationResult<()> {
            Err(ValidationError::new("always_fails", "Always fails"))
        }
    }

    #[test]
    fn is_valid_shortcut() {
        assert!(AlwaysValid.is_valid("x"));
        assert!(!AlwaysFails.is_valid("x"));
    }

    #[test]
    fn references_validate_like_their_target() {
        let fails = AlwaysFails;
        let validator: &dyn Validate<Input = str> = &fails;
        let err = (&validator).validate("x").unwrap_err();
        assert_eq!(err.code, "always_fails");
    }
}
