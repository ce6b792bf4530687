#![forbid(unsafe_code)]

//! Schema-driven validation pass.

use crate::schema::{FieldDescriptor, FieldKind, FieldSchema};
use crate::value::{FieldValue, FormValues};

use super::form_errors::FormErrors;
use super::validators::{Email, MinLength, MinValue, Required, ValidationError, Validator};

/// Stand-in for fields that were never changed.
static UNSET: FieldValue = FieldValue::Bool(false);

const PASSWORD_TOO_SHORT: &str = "Password must be at least {min} characters";

/// Validate every field of `schema` against `values`.
///
/// Returns a complete error map in schema order. `values` is only read;
/// entries for names outside the schema are ignored.
pub fn validate(values: &FormValues, schema: &FieldSchema) -> FormErrors {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("form_validate", fields = schema.len()).entered();

    let mut errors = FormErrors::new();
    for field in schema {
        if let Some(error) = validate_field(field, values.get(&field.name)) {
            errors.insert(field.name.clone(), error);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(errors = errors.len(), "validation pass complete");

    errors
}

/// Validate a single field. `None` means the field was never set.
///
/// The required check runs first, then the type check for present values;
/// the last failing check decides the field's error. The required check only
/// fails for falsy values and the type check only runs for truthy ones, so at
/// most one of them fails for any value.
pub fn validate_field(
    field: &FieldDescriptor,
    value: Option<&FieldValue>,
) -> Option<ValidationError> {
    let value = value.unwrap_or(&UNSET);
    let mut outcome = None;

    if field.required
        && let Some(error) = Required::new().validate(value).into_error()
    {
        outcome = Some(error);
    }

    if value.is_truthy() {
        let checked = match &field.kind {
            FieldKind::Email => Email::new().validate(value),
            FieldKind::Password {
                min_length: Some(min),
            } => MinLength::new(*min)
                .with_message(PASSWORD_TOO_SHORT)
                .validate(value),
            FieldKind::Number { min: Some(min) } => MinValue::new(*min).validate(value),
            FieldKind::Text
            | FieldKind::Password { min_length: None }
            | FieldKind::Number { min: None }
            | FieldKind::Select { .. }
            | FieldKind::Checkbox => Default::default(),
        };
        if let Some(error) = checked.into_error() {
            outcome = Some(error);
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SelectOption;

    fn values(pairs: &[(&str, FieldValue)]) -> FormValues {
        pairs.iter().cloned().collect()
    }

    fn valid_registration() -> FormValues {
        values(&[
            ("firstName", FieldValue::text("A")),
            ("lastName", FieldValue::text("B")),
            ("email", FieldValue::text("a@b.co")),
            ("password", FieldValue::text("secret1")),
            ("gender", FieldValue::text("male")),
        ])
    }

    #[test]
    fn empty_registration_flags_required_fields() {
        let errors = validate(&FormValues::new(), &FieldSchema::registration());
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(
            fields,
            ["firstName", "lastName", "email", "password", "gender"]
        );
        for e in &errors {
            assert_eq!(e.message(), "This field is required");
        }
    }

    #[test]
    fn valid_registration_has_no_errors() {
        let errors = validate(&valid_registration(), &FieldSchema::registration());
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let mut v = valid_registration();
        v.set("lastName", FieldValue::text(""));
        let errors = validate(&v, &FieldSchema::registration());
        assert_eq!(errors.message("lastName").as_deref(), Some("This field is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn placeholder_select_option_counts_as_missing() {
        let mut v = valid_registration();
        v.set("gender", FieldValue::text(""));
        let errors = validate(&v, &FieldSchema::registration());
        assert_eq!(errors.message("gender").as_deref(), Some("This field is required"));
    }

    #[test]
    fn email_format() {
        let mut v = valid_registration();
        v.set("email", FieldValue::text("not-an-email"));
        let errors = validate(&v, &FieldSchema::registration());
        assert_eq!(errors.message("email").as_deref(), Some("Invalid email address"));

        v.set("email", FieldValue::text("user@example.com"));
        assert!(validate(&v, &FieldSchema::registration()).is_empty());
    }

    #[test]
    fn password_min_length() {
        let mut v = valid_registration();
        v.set("password", FieldValue::text("abc"));
        let errors = validate(&v, &FieldSchema::registration());
        assert_eq!(
            errors.message("password").as_deref(),
            Some("Password must be at least 6 characters")
        );

        v.set("password", FieldValue::text("abcdef"));
        assert!(validate(&v, &FieldSchema::registration()).is_empty());
    }

    #[test]
    fn password_length_counts_utf16_units() {
        let schema =
            FieldSchema::new(vec![FieldDescriptor::password("pw", "PW", Some(6))]).unwrap();
        let v = values(&[("pw", FieldValue::text("\u{1F600}\u{1F600}\u{1F600}"))]);
        assert!(validate(&v, &schema).is_empty());

        let v = values(&[("pw", FieldValue::text("\u{1F600}\u{1F600}"))]);
        assert_eq!(
            validate(&v, &schema).message("pw").as_deref(),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn number_minimum() {
        let mut v = valid_registration();
        v.set("age", FieldValue::text("-1"));
        let errors = validate(&v, &FieldSchema::registration());
        assert_eq!(errors.message("age").as_deref(), Some("Minimum value is 0"));

        v.set("age", FieldValue::text("0"));
        assert!(validate(&v, &FieldSchema::registration()).is_empty());

        v.set("age", FieldValue::Number(-1.0));
        assert!(validate(&v, &FieldSchema::registration()).contains("age"));
    }

    #[test]
    fn non_numeric_age_passes() {
        let mut v = valid_registration();
        v.set("age", FieldValue::text("twelve"));
        assert!(validate(&v, &FieldSchema::registration()).is_empty());
    }

    #[test]
    fn signed_radix_literal_is_not_a_number() {
        let schema =
            FieldSchema::new(vec![FieldDescriptor::number("n", "N", Some(10.0))]).unwrap();
        let v = values(&[("n", FieldValue::text("0x+5"))]);
        assert!(validate(&v, &schema).is_empty());

        let v = values(&[("n", FieldValue::text("0x5"))]);
        assert!(validate(&v, &schema).contains("n"));
    }

    #[test]
    fn required_checkbox_must_be_checked() {
        let schema =
            FieldSchema::new(vec![FieldDescriptor::checkbox("terms", "Accept terms").required()])
                .unwrap();

        let errors = validate(&FormValues::new(), &schema);
        assert_eq!(errors.message("terms").as_deref(), Some("This field is required"));

        let unchecked = values(&[("terms", FieldValue::Bool(false))]);
        assert!(validate(&unchecked, &schema).contains("terms"));

        let checked = values(&[("terms", FieldValue::Bool(true))]);
        assert!(validate(&checked, &schema).is_empty());
    }

    #[test]
    fn optional_empty_fields_skip_type_checks() {
        let schema = FieldSchema::new(vec![
            FieldDescriptor::email("email", "Email"),
            FieldDescriptor::password("pw", "Password", Some(8)),
            FieldDescriptor::number("n", "N", Some(5.0)),
        ])
        .unwrap();
        let v = values(&[
            ("email", FieldValue::text("")),
            ("pw", FieldValue::text("")),
            ("n", FieldValue::Number(0.0)),
        ]);
        assert!(validate(&v, &schema).is_empty());
    }

    #[test]
    fn required_zero_number_is_missing() {
        let schema =
            FieldSchema::new(vec![FieldDescriptor::number("qty", "Qty", Some(-10.0)).required()])
                .unwrap();
        let v = values(&[("qty", FieldValue::Number(0.0))]);
        assert_eq!(
            validate(&v, &schema).message("qty").as_deref(),
            Some("This field is required")
        );

        // A typed "0" is text and therefore present.
        let v = values(&[("qty", FieldValue::text("0"))]);
        assert!(validate(&v, &schema).is_empty());
    }

    #[test]
    fn unconstrained_kinds_only_check_presence() {
        let schema = FieldSchema::new(vec![
            FieldDescriptor::password("pw", "Password", None).required(),
            FieldDescriptor::number("n", "N", None).required(),
            FieldDescriptor::select("s", "S", vec![SelectOption::new("a", "A")]).required(),
        ])
        .unwrap();
        let v = values(&[
            ("pw", FieldValue::text("x")),
            ("n", FieldValue::text("-100")),
            ("s", FieldValue::text("not-an-option")),
        ]);
        assert!(validate(&v, &schema).is_empty());
    }

    #[test]
    fn values_outside_schema_are_ignored() {
        let mut v = valid_registration();
        v.set("nickname", FieldValue::text(""));
        assert!(validate(&v, &FieldSchema::registration()).is_empty());
    }

    #[test]
    fn validation_is_idempotent() {
        let mut v = valid_registration();
        v.set("email", FieldValue::text("bad"));
        v.set("age", FieldValue::text("-3"));
        let schema = FieldSchema::registration();
        assert_eq!(validate(&v, &schema), validate(&v, &schema));
    }

    #[test]
    fn validate_field_absent_optional_is_valid() {
        let field = FieldDescriptor::email("email", "Email");
        assert!(validate_field(&field, None).is_none());
    }
}
