//! Platform-neutral description of the input affordances a field wants.
//!
//! The presentation layer maps these onto its own keyboard/content-type
//! settings; nothing here touches a widget.

use serde::{Deserialize, Serialize};

use crate::kind::{AddressKind, ContactKind, FieldType, NumberKind, PickerKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardKind {
    #[default]
    Default,
    AsciiCapable,
    Email,
    Url,
    NumberPad,
    DecimalPad,
    PhonePad,
    Alphabet,
}

/// Semantic content hint used by autofill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    EmailAddress,
    Password,
    TelephoneNumber,
    Url,
    Location,
    PostalCode,
    OneTimeCode,
}

/// What replaces the keyboard while the field is focused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputView {
    #[default]
    Keyboard,
    ListPicker,
    DatePicker,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputTraits {
    pub keyboard: KeyboardKind,
    pub content: Option<ContentKind>,
    /// Whether the field starts with its characters obscured.
    pub secure_entry: bool,
    pub input_view: InputView,
}

impl InputTraits {
    /// The affordances for a field type. Pure, like [`rule_for`](crate::rule_for).
    #[must_use]
    pub fn for_field_type(field_type: &FieldType) -> Self {
        let base = Self::default();
        match field_type {
            FieldType::Plain | FieldType::NonEmpty | FieldType::Custom { .. } => base,
            FieldType::Name => Self {
                keyboard: KeyboardKind::AsciiCapable,
                ..base
            },
            FieldType::Email => Self {
                keyboard: KeyboardKind::Email,
                content: Some(ContentKind::EmailAddress),
                ..base
            },
            FieldType::Password => Self {
                keyboard: KeyboardKind::AsciiCapable,
                content: Some(ContentKind::Password),
                secure_entry: true,
                ..base
            },
            FieldType::Number { kind } => match kind {
                NumberKind::ContactNumber(contact) => Self {
                    keyboard: match contact {
                        ContactKind::Mobile => KeyboardKind::PhonePad,
                        ContactKind::Landline => KeyboardKind::NumberPad,
                    },
                    content: Some(ContentKind::TelephoneNumber),
                    ..base
                },
                NumberKind::Plain => Self {
                    keyboard: KeyboardKind::NumberPad,
                    ..base
                },
                NumberKind::Decimal => Self {
                    keyboard: KeyboardKind::DecimalPad,
                    ..base
                },
            },
            FieldType::Url => Self {
                keyboard: KeyboardKind::Url,
                content: Some(ContentKind::Url),
                ..base
            },
            FieldType::Address { kind } => match kind {
                AddressKind::Street | AddressKind::City | AddressKind::State => Self {
                    keyboard: KeyboardKind::Alphabet,
                    content: Some(ContentKind::Location),
                    ..base
                },
                AddressKind::PostalCode => Self {
                    keyboard: KeyboardKind::NumberPad,
                    content: Some(ContentKind::PostalCode),
                    ..base
                },
            },
            FieldType::Picker { kind } => Self {
                input_view: match kind {
                    PickerKind::List { .. } => InputView::ListPicker,
                    PickerKind::Date { .. } => InputView::DatePicker,
                },
                ..base
            },
            FieldType::OneTimeCode => Self {
                content: Some(ContentKind::OneTimeCode),
                ..base
            },
        }
    }

    /// Whether keystrokes may edit the text directly.
    #[must_use]
    pub fn accepts_typed_text(&self) -> bool {
        self.input_view == InputView::Keyboard
    }
}
