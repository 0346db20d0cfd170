use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smartfield_validator::{PatternError, ValidationRule};

/// The semantic role of a text field.
///
/// Determines the validation rule (see [`rule_for`]) and the input
/// affordances (see [`InputTraits`](crate::InputTraits)). A field's type is
/// replaced wholesale, never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldType {
    /// Free text with no constraint.
    #[default]
    Plain,
    NonEmpty,
    Custom {
        rule: ValidationRule,
    },
    Name,
    Email,
    Password,
    Number {
        kind: NumberKind,
    },
    Url,
    Address {
        kind: AddressKind,
    },
    Picker {
        kind: PickerKind,
    },
    OneTimeCode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberKind {
    ContactNumber(ContactKind),
    Plain,
    Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Mobile,
    Landline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressKind {
    Street,
    City,
    State,
    PostalCode,
}

/// Which selection widget feeds a picker field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "picker", rename_all = "snake_case")]
pub enum PickerKind {
    /// A single-column list; the selected entry becomes the field text.
    List { options: Vec<String> },
    /// A date wheel; the selected date becomes the field text as `YYYY-MM-DD`.
    Date {
        mode: DatePickerMode,
        /// Earliest selectable date.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        minimum: Option<NaiveDate>,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePickerMode {
    Time,
    #[default]
    Date,
    DateAndTime,
    CountdownTimer,
}

impl FieldType {
    /// A field validated by a caller-supplied pattern.
    pub fn custom(
        pattern: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, PatternError> {
        Ok(Self::Custom {
            rule: ValidationRule::custom(pattern, message)?,
        })
    }

    #[must_use]
    pub fn number(kind: NumberKind) -> Self {
        Self::Number { kind }
    }

    #[must_use]
    pub fn contact_number(kind: ContactKind) -> Self {
        Self::number(NumberKind::ContactNumber(kind))
    }

    #[must_use]
    pub fn address(kind: AddressKind) -> Self {
        Self::Address { kind }
    }

    #[must_use]
    pub fn list_picker<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Picker {
            kind: PickerKind::List {
                options: options.into_iter().map(Into::into).collect(),
            },
        }
    }

    #[must_use]
    pub fn date_picker(mode: DatePickerMode) -> Self {
        Self::Picker {
            kind: PickerKind::Date {
                mode,
                minimum: None,
            },
        }
    }

    /// A date picker that refuses dates before `minimum`.
    #[must_use]
    pub fn date_picker_from(mode: DatePickerMode, minimum: NaiveDate) -> Self {
        Self::Picker {
            kind: PickerKind::Date {
                mode,
                minimum: Some(minimum),
            },
        }
    }

    /// The validation rule for this type. Same as [`rule_for`].
    #[must_use]
    pub fn rule(&self) -> ValidationRule {
        rule_for(self)
    }

    /// Whether text comes from a selection widget instead of the keyboard.
    #[must_use]
    pub fn is_picker(&self) -> bool {
        matches!(self, Self::Picker { .. })
    }

    /// String identifier for logging.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::NonEmpty => "non_empty",
            Self::Custom { .. } => "custom",
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number { .. } => "number",
            Self::Url => "url",
            Self::Address { .. } => "address",
            Self::Picker { .. } => "picker",
            Self::OneTimeCode => "one_time_code",
        }
    }
}

/// Resolves the validation rule for a field type.
///
/// Total and pure. `url` and `one_time_code` deliberately map to
/// [`ValidationRule::None`]; postal codes use the plain number rule.
#[must_use]
pub fn rule_for(field_type: &FieldType) -> ValidationRule {
    match field_type {
        FieldType::Plain => ValidationRule::None,
        FieldType::NonEmpty => ValidationRule::NonEmpty,
        FieldType::Custom { rule } => rule.clone(),
        FieldType::Name => ValidationRule::FullName,
        FieldType::Email => ValidationRule::Email,
        FieldType::Password => ValidationRule::Password,
        FieldType::Number { kind } => match kind {
            NumberKind::ContactNumber(_) => ValidationRule::PhoneNumber,
            NumberKind::Plain => ValidationRule::Number,
            NumberKind::Decimal => ValidationRule::DecimalNumber,
        },
        FieldType::Url => ValidationRule::None,
        FieldType::Address { kind } => match kind {
            AddressKind::Street | AddressKind::City | AddressKind::State => {
                ValidationRule::Address
            }
            AddressKind::PostalCode => ValidationRule::Number,
        },
        FieldType::Picker { kind } => match kind {
            PickerKind::List { .. } | PickerKind::Date { .. } => ValidationRule::NonEmpty,
        },
        FieldType::OneTimeCode => ValidationRule::None,
    }
}
