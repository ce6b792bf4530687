#![forbid(unsafe_code)]

//! Core validation types and the built-in field validators.

use std::collections::HashMap;
use std::fmt;

use crate::value::{FieldValue, format_number};

// ---------------------------------------------------------------------------
// Error Codes
// ---------------------------------------------------------------------------

/// Error code for required field validation.
pub const ERROR_CODE_REQUIRED: &str = "required";
/// Error code for minimum length validation.
pub const ERROR_CODE_MIN_LENGTH: &str = "too_short";
/// Error code for email validation.
pub const ERROR_CODE_EMAIL: &str = "email";
/// Error code for minimum value validation.
pub const ERROR_CODE_MIN_VALUE: &str = "too_small";

// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/// A validation error with code, message template, and interpolation parameters.
///
/// # Example
///
/// ```rust
/// use fform_core::validation::ValidationError;
///
/// let error = ValidationError::new("too_short", "Password must be at least {min} characters")
///     .with_param("min", 6);
///
/// assert_eq!(error.format_message(), "Password must be at least 6 characters");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Stable error code for programmatic handling.
    pub code: &'static str,
    /// Human-readable message template.
    pub message: String,
    /// Parameters substituted into `{key}` placeholders.
    pub params: HashMap<String, String>,
}

impl ValidationError {
    /// Create a new validation error with the given code and message.
    #[must_use]
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            params: HashMap::new(),
        }
    }

    /// Add a parameter for message interpolation.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(key.into(), value.to_string());
        self
    }

    /// Format the message with parameter substitution.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut result = self.message.clone();
        for (key, value) in &self.params {
            result = result.replace(&format!("{{{key}}}"), value);
        }
        result
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_message())
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// ValidationResult
// ---------------------------------------------------------------------------

/// The result of a validation operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationResult {
    /// The value is valid.
    #[default]
    Valid,
    /// The value is invalid with an error.
    Invalid(ValidationError),
}

impl ValidationResult {
    /// Consume the result, yielding the error if any.
    #[must_use]
    pub fn into_error(self) -> Option<ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Validator Trait
// ---------------------------------------------------------------------------

/// A trait for validating values of type `T`.
///
/// # Implementing a Custom Validator
///
/// ```rust
/// use fform_core::FieldValue;
/// use fform_core::validation::{ValidationError, ValidationResult, Validator};
///
/// struct NoSpaces;
///
/// impl Validator<FieldValue> for NoSpaces {
///     fn validate(&self, value: &FieldValue) -> ValidationResult {
///         if value.to_string().contains(' ') {
///             ValidationResult::Invalid(ValidationError::new("no_spaces", self.error_message()))
///         } else {
///             ValidationResult::Valid
///         }
///     }
///
///     fn error_message(&self) -> &str {
///         "Value must not contain spaces"
///     }
/// }
///
/// assert!(NoSpaces.validate(&FieldValue::text("a b")).into_error().is_some());
/// ```
pub trait Validator<T: ?Sized>: Send + Sync {
    /// Validate the given value.
    fn validate(&self, value: &T) -> ValidationResult;

    /// Return the default error message for this validator.
    fn error_message(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Built-in Validators
// ---------------------------------------------------------------------------

/// Validates that a value is truthy: non-empty text, a non-zero number, or a
/// checked checkbox. Whitespace counts as content.
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

impl Required {
    /// Create a new `Required` validator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Validator<FieldValue> for Required {
    fn validate(&self, value: &FieldValue) -> ValidationResult {
        if value.is_truthy() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(ValidationError::new(
                ERROR_CODE_REQUIRED,
                self.error_message(),
            ))
        }
    }

    fn error_message(&self) -> &str {
        "This field is required"
    }
}

/// Validates that a text value is at least `min` long.
///
/// Length is counted in UTF-16 code units, the unit a browser reports for
/// an input's value, so a character outside the Basic Multilingual Plane
/// counts twice. Non-text values have no length and always pass.
#[derive(Debug, Clone)]
pub struct MinLength {
    /// Minimum length in UTF-16 code units.
    pub min: usize,
    /// Message template; `{min}` and `{actual}` are substituted.
    pub message: String,
}

impl MinLength {
    /// Create a new `MinLength` validator.
    #[must_use]
    pub fn new(min: usize) -> Self {
        Self {
            min,
            message: "Must be at least {min} characters".to_string(),
        }
    }

    /// Set a custom message template.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Validator<FieldValue> for MinLength {
    fn validate(&self, value: &FieldValue) -> ValidationResult {
        let Some(text) = value.as_str() else {
            return ValidationResult::Valid;
        };
        let len = text.encode_utf16().count();
        if len < self.min {
            ValidationResult::Invalid(
                ValidationError::new(ERROR_CODE_MIN_LENGTH, &self.message)
                    .with_param("min", self.min)
                    .with_param("actual", len),
            )
        } else {
            ValidationResult::Valid
        }
    }

    fn error_message(&self) -> &str {
        &self.message
    }
}

/// Validates that a value looks like an email address.
///
/// Accepts `local@domain.tld` where every part is free of whitespace and `@`,
/// and the domain holds a dot with at least one character on each side. No
/// RFC 5322 parsing. Empty values pass (use [`Required`] for presence).
#[derive(Debug, Clone, Copy, Default)]
pub struct Email;

impl Email {
    /// Create a new `Email` validator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Validator<FieldValue> for Email {
    fn validate(&self, value: &FieldValue) -> ValidationResult {
        if !value.is_truthy() || is_email_shaped(&value.to_string()) {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(ValidationError::new(ERROR_CODE_EMAIL, self.error_message()))
        }
    }

    fn error_message(&self) -> &str {
        "Invalid email address"
    }
}

/// Whether `s` is `[^\s@]+ @ [^\s@]+ . [^\s@]+` as a whole.
pub fn is_email_shaped(s: &str) -> bool {
    fn is_plain(c: char) -> bool {
        !(c == '@' || c.is_whitespace() || c == '\u{feff}')
    }

    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || !local.chars().all(is_plain) || !domain.chars().all(is_plain) {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Validates that a value's numeric interpretation is at least `min`.
///
/// Values that do not parse as numbers pass: `NaN` is never below a bound.
#[derive(Debug, Clone, Copy)]
pub struct MinValue {
    /// Inclusive lower bound.
    pub min: f64,
}

impl MinValue {
    /// Create a new `MinValue` validator.
    #[must_use]
    pub fn new(min: f64) -> Self {
        Self { min }
    }
}

impl Validator<FieldValue> for MinValue {
    fn validate(&self, value: &FieldValue) -> ValidationResult {
        let n = value.to_number();
        if n < self.min {
            ValidationResult::Invalid(
                ValidationError::new(ERROR_CODE_MIN_VALUE, self.error_message())
                    .with_param("min", format_number(self.min))
                    .with_param("actual", format_number(n)),
            )
        } else {
            ValidationResult::Valid
        }
    }

    fn error_message(&self) -> &str {
        "Minimum value is {min}"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FieldValue {
        FieldValue::text(s)
    }

    fn passes(result: ValidationResult) -> bool {
        result == ValidationResult::Valid
    }

    fn message(result: ValidationResult) -> Option<String> {
        result.into_error().map(|e| e.format_message())
    }

    // -- ValidationError tests --

    #[test]
    fn validation_error_format_message() {
        let err = ValidationError::new("test", "Must be at least {min} characters")
            .with_param("min", 8);
        assert_eq!(err.format_message(), "Must be at least 8 characters");
    }

    #[test]
    fn validation_error_format_multiple_params() {
        let err = ValidationError::new("test", "{actual} of {min}")
            .with_param("min", 6)
            .with_param("actual", 3);
        assert_eq!(err.format_message(), "3 of 6");
    }

    #[test]
    fn validation_error_display() {
        let err = ValidationError::new("test", "Minimum value is {min}").with_param("min", "0");
        assert_eq!(format!("{err}"), "Minimum value is 0");
    }

    #[test]
    fn into_error_yields_invalid_payload() {
        assert!(ValidationResult::Valid.into_error().is_none());
        let invalid = ValidationResult::Invalid(ValidationError::new("x", "msg"));
        assert_eq!(invalid.into_error().map(|e| e.code), Some("x"));
    }

    // -- Required tests --

    #[test]
    fn required_rejects_falsy_values() {
        let v = Required::new();
        assert!(!passes(v.validate(&text(""))));
        assert!(!passes(v.validate(&FieldValue::Bool(false))));
        assert!(!passes(v.validate(&FieldValue::Number(0.0))));
    }

    #[test]
    fn required_accepts_whitespace_and_zero_text() {
        let v = Required::new();
        assert!(passes(v.validate(&text("   "))));
        assert!(passes(v.validate(&text("0"))));
        assert!(passes(v.validate(&FieldValue::Bool(true))));
    }

    #[test]
    fn required_message() {
        let error = Required::new().validate(&text("")).into_error();
        assert_eq!(error.as_ref().map(|e| e.code), Some(ERROR_CODE_REQUIRED));
        assert_eq!(
            error.map(|e| e.format_message()).as_deref(),
            Some("This field is required")
        );
    }

    // -- MinLength tests --

    #[test]
    fn min_length_boundary() {
        let v = MinLength::new(6);
        assert!(!passes(v.validate(&text("abcde"))));
        assert!(passes(v.validate(&text("abcdef"))));
        assert!(passes(v.validate(&text("abcdefg"))));
    }

    #[test]
    fn min_length_counts_utf16_units() {
        let v = MinLength::new(4);
        assert!(passes(v.validate(&text("café"))));
        assert!(!passes(v.validate(&text("caf"))));

        // Astral characters are surrogate pairs: three emoji are six units.
        let v = MinLength::new(6);
        assert!(passes(v.validate(&text("\u{1F600}\u{1F600}\u{1F600}"))));
        assert!(!passes(v.validate(&text("\u{1F600}\u{1F600}a"))));
    }

    #[test]
    fn min_length_ignores_non_text() {
        let v = MinLength::new(6);
        assert!(passes(v.validate(&FieldValue::Number(12.0))));
        assert!(passes(v.validate(&FieldValue::Bool(true))));
    }

    #[test]
    fn min_length_custom_message() {
        let v = MinLength::new(6).with_message("Password must be at least {min} characters");
        let error = v.validate(&text("abc")).into_error();
        assert_eq!(
            error.as_ref().and_then(|e| e.params.get("actual")).map(String::as_str),
            Some("3")
        );
        assert_eq!(
            error.map(|e| e.format_message()).as_deref(),
            Some("Password must be at least 6 characters")
        );
    }

    // -- Email tests --

    #[test]
    fn email_valid() {
        let v = Email::new();
        assert!(passes(v.validate(&text("user@example.com"))));
        assert!(passes(v.validate(&text("a@b.co"))));
        assert!(passes(v.validate(&text("user+tag@mail.example.org"))));
        assert!(passes(v.validate(&text("user@example.c"))));
    }

    #[test]
    fn email_invalid() {
        let v = Email::new();
        assert!(!passes(v.validate(&text("not-an-email"))));
        assert!(!passes(v.validate(&text("@example.com"))));
        assert!(!passes(v.validate(&text("user@"))));
        assert!(!passes(v.validate(&text("user@example"))));
        assert!(!passes(v.validate(&text("user@.com"))));
        assert!(!passes(v.validate(&text("user@example."))));
        assert!(!passes(v.validate(&text("a@b@c.d"))));
        assert!(!passes(v.validate(&text("us er@example.com"))));
        assert!(!passes(v.validate(&text(" user@example.com"))));
    }

    #[test]
    fn email_allows_extra_dots() {
        assert!(is_email_shaped("a@b..c"));
        assert!(is_email_shaped("a.b@c.d.e"));
        assert!(!is_email_shaped("a@.b"));
    }

    #[test]
    fn email_empty_is_valid() {
        assert!(passes(Email::new().validate(&text(""))));
    }

    #[test]
    fn email_checks_non_text_by_display() {
        assert!(!passes(Email::new().validate(&FieldValue::Number(5.0))));
        assert!(!passes(Email::new().validate(&FieldValue::Bool(true))));
    }

    // -- MinValue tests --

    #[test]
    fn min_value_boundary() {
        let v = MinValue::new(0.0);
        assert!(!passes(v.validate(&text("-1"))));
        assert!(passes(v.validate(&text("0"))));
        assert!(passes(v.validate(&text("1"))));
        assert!(!passes(v.validate(&FieldValue::Number(-0.5))));
    }

    #[test]
    fn min_value_message() {
        let result = MinValue::new(18.0).validate(&text("17"));
        assert_eq!(message(result).as_deref(), Some("Minimum value is 18"));

        let result = MinValue::new(0.5).validate(&text("0.25"));
        assert_eq!(message(result).as_deref(), Some("Minimum value is 0.5"));
    }

    #[test]
    fn min_value_nan_passes() {
        let v = MinValue::new(0.0);
        assert!(passes(v.validate(&text("abc"))));
        assert!(passes(v.validate(&FieldValue::Number(f64::NAN))));
    }
}
