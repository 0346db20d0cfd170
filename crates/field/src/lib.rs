//! # smartfield-field
//!
//! Typed text fields that validate themselves as the user types, and the
//! form-level aggregation of their validity.
//!
//! ## Quick Start
//!
//! ```rust
//! use smartfield_field::prelude::*;
//!
//! let aggregator = FormAggregator::new().shared();
//!
//! let mut email = ValidatedField::new("email", FieldType::Email);
//! let mut password = ValidatedField::new("password", FieldType::Password);
//! aggregator.lock().register("email");
//! aggregator.lock().register("password");
//! email.register_observer(FormAggregator::observer(&aggregator));
//! password.register_observer(FormAggregator::observer(&aggregator));
//!
//! email.set_text("a@b.co");
//! assert!(!aggregator.lock().is_valid());
//!
//! password.set_text("Abc12!");
//! assert!(aggregator.lock().is_valid());
//! ```
//!
//! ## Pieces
//!
//! - [`FieldType`] names what a field holds; [`rule_for`] maps it onto a
//!   [`ValidationRule`](smartfield_validator::ValidationRule) and
//!   [`InputTraits`] onto keyboard and picker affordances.
//! - [`ValidatedField`] owns the text and derives [`Feedback`] on every
//!   change, notifying one observer each time.
//! - [`FormAggregator`] folds per-field notifications into one decision;
//!   [`Form`] and [`FormSchema`] wire fields to it.

pub mod error;
pub mod feedback;
pub mod field;
pub mod form;
pub mod input;
pub mod kind;
pub mod observer;
pub mod picker;
pub mod prelude;
pub mod schema;

pub use error::FieldError;
pub use feedback::{Feedback, FeedbackMode, Highlight};
pub use field::ValidatedField;
pub use form::{Form, FormAggregator, FormChangeCallback, SharedFormAggregator};
pub use input::{ContentKind, InputTraits, InputView, KeyboardKind};
pub use kind::{
    AddressKind, ContactKind, DatePickerMode, FieldType, NumberKind, PickerKind, rule_for,
};
pub use observer::{FieldNotification, ObserverId, ValidityObserver};
pub use picker::PickerSelection;
pub use schema::{FieldSpec, FormSchema};
