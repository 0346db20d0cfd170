//! Form-level validity built from per-field notifications.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::FieldError;
use crate::feedback::FeedbackMode;
use crate::field::ValidatedField;
use crate::observer::FieldNotification;

/// Callback fired when the aggregate decision flips.
pub type FormChangeCallback = Box<dyn FnMut(bool) + Send>;

/// An aggregator shared between every field observer of a form.
pub type SharedFormAggregator = Arc<Mutex<FormAggregator>>;

// ============================================================================
// FormAggregator
// ============================================================================

/// Tracks the latest validity of each field and derives one form decision.
///
/// The form is valid when it tracks at least one field and every tracked
/// field last reported valid. Notifications may arrive in any order; only
/// the latest per field counts.
///
/// ```rust
/// use smartfield_field::{FieldNotification, FormAggregator};
///
/// let mut form = FormAggregator::with_fields(["email", "password"]);
/// let note = |field: &str, is_valid| FieldNotification {
///     field: field.into(),
///     is_valid,
///     text: String::new(),
/// };
///
/// assert!(!form.record(&note("email", true)));
/// assert!(form.record(&note("password", true)));
/// assert!(!form.record(&note("email", false)));
/// ```
#[derive(Default)]
pub struct FormAggregator {
    validity: BTreeMap<String, bool>,
    decision: bool,
    on_change: Option<FormChangeCallback>,
}

impl FormAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking `names`, each initially invalid.
    pub fn with_fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut form = Self::new();
        for name in names {
            form.validity.insert(name.into(), false);
        }
        form
    }

    /// Starts tracking `name` as invalid. Returns `false` if it was already
    /// tracked, leaving its validity untouched.
    pub fn register(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.validity.contains_key(&name) {
            return false;
        }
        self.validity.insert(name, false);
        self.recompute();
        true
    }

    /// Stops tracking `name`.
    pub fn remove(&mut self, name: &str) -> bool {
        let removed = self.validity.remove(name).is_some();
        if removed {
            self.recompute();
        }
        removed
    }

    /// Records a field notification and returns the aggregate decision.
    /// Unknown field names are tracked from then on.
    pub fn record(&mut self, notification: &FieldNotification) -> bool {
        self.set_validity(notification.field.clone(), notification.is_valid)
    }

    /// Sets one field's validity and returns the aggregate decision.
    pub fn set_validity(&mut self, name: impl Into<String>, is_valid: bool) -> bool {
        self.validity.insert(name.into(), is_valid);
        self.recompute();
        self.decision
    }

    /// Whether the form can be submitted.
    pub fn is_valid(&self) -> bool {
        self.decision
    }

    pub fn field_validity(&self, name: &str) -> Option<bool> {
        self.validity.get(name).copied()
    }

    /// Names of tracked fields currently invalid, in name order.
    pub fn invalid_fields(&self) -> impl Iterator<Item = &str> {
        self.validity
            .iter()
            .filter(|(_, valid)| !**valid)
            .map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.validity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validity.is_empty()
    }

    /// Sets the callback fired whenever [`is_valid`](Self::is_valid) flips.
    ///
    /// When the aggregator is shared, the callback runs with its lock held
    /// and must not lock it again.
    pub fn on_change<F>(&mut self, callback: F)
    where
        F: FnMut(bool) + Send + 'static,
    {
        self.on_change = Some(Box::new(callback));
    }

    /// Wraps the aggregator for use from several field observers.
    pub fn shared(self) -> SharedFormAggregator {
        Arc::new(Mutex::new(self))
    }

    /// Builds a field observer that records into `shared`.
    pub fn observer(
        shared: &SharedFormAggregator,
    ) -> impl FnMut(&FieldNotification) + Send + 'static + use<> {
        let shared = Arc::clone(shared);
        move |notification| {
            shared.lock().record(notification);
        }
    }

    fn recompute(&mut self) {
        let decision = !self.validity.is_empty() && self.validity.values().all(|valid| *valid);
        if decision != self.decision {
            self.decision = decision;
            tracing::debug!(valid = decision, fields = self.validity.len(), "form validity changed");
            if let Some(callback) = &mut self.on_change {
                callback(decision);
            }
        }
    }
}

impl fmt::Debug for FormAggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormAggregator")
            .field("validity", &self.validity)
            .field("decision", &self.decision)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

// ============================================================================
// Form
// ============================================================================

/// A set of named fields wired to one shared aggregator.
///
/// Each field's observer slot is taken by the aggregator; registering
/// another observer on a field through [`field_mut`](Self::field_mut)
/// disconnects it from the form.
#[derive(Debug)]
pub struct Form {
    fields: Vec<ValidatedField>,
    aggregator: SharedFormAggregator,
}

impl Form {
    /// Wires `fields` to a fresh aggregator seeded with their current
    /// validity. Field names must be unique.
    pub fn new(fields: Vec<ValidatedField>) -> Result<Self, FieldError> {
        Self::with_aggregator(fields, FormAggregator::new())
    }

    /// Like [`new`](Self::new), reusing a pre-configured aggregator such as
    /// one with an [`on_change`](FormAggregator::on_change) callback.
    pub fn with_aggregator(
        mut fields: Vec<ValidatedField>,
        aggregator: FormAggregator,
    ) -> Result<Self, FieldError> {
        let aggregator = aggregator.shared();
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|other| other.name() == field.name()) {
                return Err(FieldError::DuplicateField(field.name().to_owned()));
            }
        }
        {
            let mut shared = aggregator.lock();
            for field in &fields {
                shared.set_validity(field.name(), field.is_valid());
            }
        }
        for field in &mut fields {
            field.register_observer(FormAggregator::observer(&aggregator));
        }
        tracing::debug!(fields = fields.len(), "form assembled");
        Ok(Self { fields, aggregator })
    }

    pub fn field(&self, name: &str) -> Option<&ValidatedField> {
        self.fields.iter().find(|field| field.name() == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Result<&mut ValidatedField, FieldError> {
        self.fields
            .iter_mut()
            .find(|field| field.name() == name)
            .ok_or_else(|| FieldError::UnknownField(name.to_owned()))
    }

    /// Sets a field's text by name.
    pub fn set_text(
        &mut self,
        name: &str,
        text: impl Into<String>,
    ) -> Result<FeedbackMode, FieldError> {
        Ok(self.field_mut(name)?.set_text(text))
    }

    pub fn fields(&self) -> impl Iterator<Item = &ValidatedField> {
        self.fields.iter()
    }

    pub fn aggregator(&self) -> &SharedFormAggregator {
        &self.aggregator
    }

    /// Whether every field last reported valid.
    pub fn is_valid(&self) -> bool {
        self.aggregator.lock().is_valid()
    }
}
