//! Declarative form definitions loaded from JSON.
//!
//! ```json
//! {
//!   "fields": [
//!     { "name": "email", "type": "email" },
//!     { "name": "phone", "type": "number", "kind": { "contact_number": "mobile" } },
//!     { "name": "code", "type": "custom",
//!       "rule": { "rule": "custom", "pattern": "[0-9]{4}", "message": "Four digits" } }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::field::ValidatedField;
use crate::form::{Form, FormAggregator};
use crate::kind::FieldType;

/// One field of a [`FormSchema`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(flatten)]
    pub field_type: FieldType,
    /// Text the field starts with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_text: Option<String>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            initial_text: None,
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn initial_text(mut self, text: impl Into<String>) -> Self {
        self.initial_text = Some(text.into());
        self
    }

    fn build(&self) -> ValidatedField {
        let field = ValidatedField::new(self.name.clone(), self.field_type.clone());
        match &self.initial_text {
            Some(text) => field.with_text(text.clone()),
            None => field,
        }
    }
}

/// An ordered list of field definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// Parses a schema. Custom patterns are compiled while parsing, so a bad
    /// pattern fails here rather than on first use.
    pub fn from_json(json: &str) -> Result<Self, FieldError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, FieldError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds the fields and wires them into a [`Form`].
    pub fn build(&self) -> Result<Form, FieldError> {
        self.build_with(FormAggregator::new())
    }

    /// Builds the form around a pre-configured aggregator.
    pub fn build_with(&self, aggregator: FormAggregator) -> Result<Form, FieldError> {
        let fields = self.fields.iter().map(FieldSpec::build).collect();
        Form::with_aggregator(fields, aggregator)
    }
}
