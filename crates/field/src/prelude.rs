//! Prelude module for convenient imports.

pub use crate::error::FieldError;
pub use crate::feedback::{Feedback, FeedbackMode, Highlight};
pub use crate::field::ValidatedField;
pub use crate::form::{Form, FormAggregator, SharedFormAggregator};
pub use crate::input::InputTraits;
pub use crate::kind::{AddressKind, ContactKind, FieldType, NumberKind, rule_for};
pub use crate::observer::{FieldNotification, ObserverId};
pub use crate::schema::{FieldSpec, FormSchema};
pub use smartfield_validator::prelude::{ValidationRule, Verdict, evaluate};
