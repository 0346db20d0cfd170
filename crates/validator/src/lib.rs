//! # smartfield-validator
//!
//! The rule catalog and pattern evaluator behind smartfield's text fields.
//!
//! ## Quick Start
//!
//! ```rust
//! use smartfield_validator::prelude::*;
//!
//! let verdict = evaluate("Abc12!", &ValidationRule::Password);
//! assert!(verdict.is_valid);
//!
//! let verdict = evaluate("abcdef", &ValidationRule::Password);
//! assert_eq!(
//!     verdict.error_message.as_deref(),
//!     Some("8 letters with capital, number & special character"),
//! );
//! ```
//!
//! ## Rules
//!
//! [`ValidationRule`] is a closed set: `none`, `non_empty`, `email`,
//! `full_name`, `address`, `password`, `number`, `zip_code`,
//! `decimal_number`, `phone_number`, plus `custom(pattern, message)`.
//! Patterns always match the whole input (see [`Pattern`]). A malformed
//! custom pattern is rejected when the rule is built, with a
//! [`PatternError`].
//!
//! Evaluation is pure and holds no mutable state; the compiled catalog is
//! shared read-only between threads.

pub mod error;
pub mod foundation;
pub mod pattern;
pub mod prelude;
pub mod rule;
pub mod verdict;

pub use error::PatternError;
pub use pattern::Pattern;
pub use rule::{CustomRule, ValidationRule};
pub use verdict::{Verdict, evaluate};
