//! Prelude module for convenient imports.
//!
//! ```rust
//! use smartfield_validator::prelude::*;
//!
//! let verdict = evaluate("12345", &ValidationRule::ZipCode);
//! assert!(verdict.is_valid);
//! ```

pub use crate::error::PatternError;
pub use crate::foundation::{Validate, ValidationError, ValidationResult};
pub use crate::pattern::Pattern;
pub use crate::rule::{CustomRule, ValidationRule};
pub use crate::verdict::{Verdict, evaluate};
