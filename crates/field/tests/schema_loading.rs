//! Loading form definitions from JSON and building working forms.

use pretty_assertions::assert_eq;
use smartfield_field::prelude::*;
use smartfield_field::{InputView, KeyboardKind};

const SIGNUP: &str = r#"{
    "fields": [
        { "name": "name", "type": "name" },
        { "name": "email", "type": "email", "initial_text": "a@b.co" },
        { "name": "password", "type": "password" },
        { "name": "phone", "type": "number", "kind": { "contact_number": "mobile" } },
        { "name": "zip", "type": "address", "kind": "postal_code" },
        { "name": "size", "type": "picker", "kind": { "picker": "list", "options": ["S", "M", "L"] } }
    ]
}"#;

#[test]
fn signup_schema_builds_a_working_form() {
    let schema = FormSchema::from_json(SIGNUP).unwrap();
    assert_eq!(schema.fields.len(), 6);

    let mut form = schema.build().unwrap();
    assert_eq!(form.field("email").unwrap().mode(), FeedbackMode::Valid);
    assert!(!form.is_valid());

    form.set_text("name", "Ann Lee").unwrap();
    form.set_text("password", "Abc12!").unwrap();
    form.set_text("phone", "0123456789").unwrap();
    form.set_text("zip", "90210").unwrap();
    form.field_mut("size").unwrap().select_option(2).unwrap();

    assert!(form.is_valid());
}

#[test]
fn schema_resolves_affordances() {
    let form = FormSchema::from_json(SIGNUP).unwrap().build().unwrap();

    let phone = form.field("phone").unwrap().input_traits();
    assert_eq!(phone.keyboard, KeyboardKind::PhonePad);

    let size = form.field("size").unwrap().input_traits();
    assert_eq!(size.input_view, InputView::ListPicker);

    assert!(form.field("password").unwrap().is_secure_entry());
}

#[test]
fn duplicate_names_are_rejected() {
    let schema = FormSchema::from_json(
        r#"{"fields":[{"name":"a","type":"plain"},{"name":"a","type":"email"}]}"#,
    )
    .unwrap();
    let err = schema.build().unwrap_err();
    assert!(matches!(err, FieldError::DuplicateField(name) if name == "a"));
}

#[test]
fn unknown_type_is_a_schema_error() {
    let err = FormSchema::from_json(r#"{"fields":[{"name":"a","type":"telepathy"}]}"#)
        .unwrap_err();
    assert_eq!(err.code(), "FIELD_SCHEMA");
}

#[test]
fn schema_serializes_back() {
    let schema = FormSchema {
        fields: vec![FieldSpec::new("email", FieldType::Email).initial_text("x@y.io")],
    };
    let json = schema.to_json().unwrap();
    assert_eq!(FormSchema::from_json(&json).unwrap(), schema);
}
