//! The validity state machine behind a single text field.

use std::sync::mpsc::Sender;

use chrono::NaiveDate;
use smartfield_validator::ValidationRule;

use crate::error::FieldError;
use crate::feedback::{Feedback, FeedbackMode};
use crate::input::InputTraits;
use crate::kind::{FieldType, PickerKind, rule_for};
use crate::observer::{FieldNotification, ObserverId, ObserverSlot};
use crate::picker::{PickerSelection, format_date};

/// Everything derived from the field type. Replaced as a whole on every type
/// change so the rule and the affordances can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Resolution {
    field_type: FieldType,
    rule: ValidationRule,
    traits: InputTraits,
}

impl Resolution {
    fn new(field_type: FieldType) -> Self {
        // Rule first: affordance reconfiguration may rely on it.
        let rule = rule_for(&field_type);
        let traits = InputTraits::for_field_type(&field_type);
        Self {
            field_type,
            rule,
            traits,
        }
    }
}

/// A text field that validates itself as its text or type changes.
///
/// Holds the current [`FieldType`], the rule resolved for it, the current
/// text and the [`Feedback`] derived from both. Every text change, type
/// change and focus-in recomputes the feedback synchronously and emits
/// exactly one [`FieldNotification`] to the registered observer, even when
/// nothing changed.
///
/// # Examples
///
/// ```rust
/// use smartfield_field::{FeedbackMode, FieldType, ValidatedField};
///
/// let mut email = ValidatedField::new("email", FieldType::Email);
/// assert_eq!(email.mode(), FeedbackMode::Neutral);
///
/// assert_eq!(email.set_text("bad"), FeedbackMode::Invalid);
/// assert_eq!(email.feedback().error_message.as_deref(), Some("Email is invalid"));
///
/// assert_eq!(email.set_text("a@b.co"), FeedbackMode::Valid);
/// assert_eq!(email.feedback().error_message, None);
/// ```
#[derive(Debug)]
pub struct ValidatedField {
    name: String,
    resolution: Resolution,
    text: String,
    feedback: Feedback,
    secure_entry: bool,
    focused: bool,
    selection: PickerSelection,
    observer: ObserverSlot,
}

impl ValidatedField {
    /// Creates an empty field; it starts out [`FeedbackMode::Neutral`].
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        let resolution = Resolution::new(field_type);
        let feedback = Feedback::resolve("", &resolution.rule);
        Self {
            name: name.into(),
            secure_entry: resolution.traits.secure_entry,
            resolution,
            text: String::new(),
            feedback,
            focused: false,
            selection: PickerSelection::default(),
            observer: ObserverSlot::default(),
        }
    }

    /// Seeds the text before any observer is attached.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self.feedback = Feedback::resolve(&self.text, &self.resolution.rule);
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> &FieldType {
        &self.resolution.field_type
    }

    /// The rule resolved for the current type.
    pub fn rule(&self) -> &ValidationRule {
        &self.resolution.rule
    }

    pub fn input_traits(&self) -> InputTraits {
        self.resolution.traits
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> FeedbackMode {
        self.feedback.mode
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Validity last reported to the observer.
    pub fn is_valid(&self) -> bool {
        self.feedback.is_valid
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether characters are currently obscured.
    pub fn is_secure_entry(&self) -> bool {
        self.secure_entry
    }

    pub fn picker_selection(&self) -> PickerSelection {
        self.selection
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Replaces the field type, re-resolves the rule and re-validates the
    /// current text against it.
    pub fn set_field_type(&mut self, field_type: FieldType) -> FeedbackMode {
        if field_type != self.resolution.field_type {
            let resolution = Resolution::new(field_type);
            tracing::debug!(
                field = %self.name,
                from = self.resolution.field_type.as_str(),
                to = resolution.field_type.as_str(),
                rule = resolution.rule.name(),
                "field type changed"
            );
            self.secure_entry = resolution.traits.secure_entry;
            self.selection = PickerSelection::default();
            self.resolution = resolution;
        }
        self.revalidate()
    }

    /// Replaces the text programmatically and re-validates it.
    pub fn set_text(&mut self, text: impl Into<String>) -> FeedbackMode {
        self.text = text.into();
        self.revalidate()
    }

    /// Applies a keystroke edit. Picker-backed fields reject typed input.
    pub fn type_text(&mut self, text: impl Into<String>) -> Result<FeedbackMode, FieldError> {
        if !self.resolution.traits.accepts_typed_text() {
            return Err(FieldError::TypedInputRejected {
                field: self.name.clone(),
            });
        }
        Ok(self.set_text(text))
    }

    /// Focus-in: the field re-checks its text and notifies.
    pub fn begin_editing(&mut self) -> FeedbackMode {
        self.focused = true;
        self.revalidate()
    }

    /// Focus-out. A picker commits its current selection into the text.
    pub fn end_editing(&mut self) -> FeedbackMode {
        self.focused = false;
        let committed = match &self.resolution.field_type {
            FieldType::Picker {
                kind: PickerKind::List { options },
            } => options.get(self.selection.row).cloned(),
            FieldType::Picker {
                kind: PickerKind::Date { .. },
            } => self.selection.date.map(format_date),
            _ => None,
        };
        match committed {
            Some(text) => self.set_text(text),
            None => self.feedback.mode,
        }
    }

    /// Selects a row of a list picker and writes that option into the text.
    pub fn select_option(&mut self, index: usize) -> Result<FeedbackMode, FieldError> {
        let FieldType::Picker {
            kind: PickerKind::List { options },
        } = &self.resolution.field_type
        else {
            return Err(FieldError::NotAPicker {
                field: self.name.clone(),
                expected: "list",
            });
        };
        let option = options
            .get(index)
            .cloned()
            .ok_or_else(|| FieldError::OptionOutOfRange {
                field: self.name.clone(),
                index,
                len: options.len(),
            })?;
        self.selection.row = index;
        Ok(self.set_text(option))
    }

    /// Picks a date on a date picker and writes it as `YYYY-MM-DD`.
    /// Dates before the picker's minimum are refused and leave the text as is.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<FeedbackMode, FieldError> {
        let FieldType::Picker {
            kind: PickerKind::Date { minimum, .. },
        } = &self.resolution.field_type
        else {
            return Err(FieldError::NotAPicker {
                field: self.name.clone(),
                expected: "date",
            });
        };
        if let Some(minimum) = *minimum
            && date < minimum
        {
            return Err(FieldError::DateBeforeMinimum {
                field: self.name.clone(),
                date,
                minimum,
            });
        }
        self.selection.date = Some(date);
        Ok(self.set_text(format_date(date)))
    }

    /// Flips secure entry on a password field and returns the new state.
    /// Other field types never obscure their text, so this returns `false`.
    pub fn toggle_secure_entry(&mut self) -> bool {
        if self.resolution.field_type == FieldType::Password {
            self.secure_entry = !self.secure_entry;
            tracing::trace!(field = %self.name, secure = self.secure_entry, "secure entry toggled");
        }
        self.secure_entry
    }

    // ------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------

    /// Registers the observer, replacing any previous one.
    pub fn register_observer<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&FieldNotification) + Send + 'static,
    {
        self.observer.register(Box::new(observer))
    }

    /// Forwards notifications into a channel. A closed receiver is ignored.
    pub fn register_channel(&mut self, sender: Sender<FieldNotification>) -> ObserverId {
        self.register_observer(move |notification| {
            if sender.send(notification.clone()).is_err() {
                tracing::trace!(field = %notification.field, "notification receiver dropped");
            }
        })
    }

    /// Removes the observer if `id` still identifies it.
    pub fn unregister_observer(&mut self, id: ObserverId) -> bool {
        self.observer.unregister(id)
    }

    fn revalidate(&mut self) -> FeedbackMode {
        let feedback = Feedback::resolve(&self.text, &self.resolution.rule);
        if feedback.mode != self.feedback.mode {
            tracing::debug!(
                field = %self.name,
                rule = self.resolution.rule.name(),
                from = self.feedback.mode.as_str(),
                to = feedback.mode.as_str(),
                "feedback mode changed"
            );
        }
        self.feedback = feedback;

        if self.observer.is_registered() {
            self.observer.notify(&FieldNotification {
                field: self.name.clone(),
                is_valid: self.feedback.is_valid,
                text: self.text.clone(),
            });
        }
        self.feedback.mode
    }
}
