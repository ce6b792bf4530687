#![forbid(unsafe_code)]

//! Field validation driven by the schema.
//!
//! This module provides:
//! - A core `Validator` trait and the built-in field validators
//!   (required, email, minimum length, minimum value)
//! - Error messages with `{param}` interpolation
//! - The validation pass that turns values + schema into a [`FormErrors`] map
//!
//! # Example
//!
//! ```rust
//! use fform_core::validation::{Email, Required, ValidationResult, Validator};
//! use fform_core::FieldValue;
//!
//! assert_eq!(Required::new().validate(&FieldValue::text("hello")), ValidationResult::Valid);
//!
//! let error = Email::new().validate(&FieldValue::text("not-an-email")).into_error();
//! assert_eq!(error.map(|e| e.to_string()).as_deref(), Some("Invalid email address"));
//! ```

mod form_errors;
mod rules;
mod validators;

pub use form_errors::{FieldError, FormErrors};
pub use rules::{validate, validate_field};
pub use validators::{
    // Error codes
    ERROR_CODE_EMAIL,
    ERROR_CODE_MIN_LENGTH,
    ERROR_CODE_MIN_VALUE,
    ERROR_CODE_REQUIRED,
    // Built-in validators
    Email,
    MinLength,
    MinValue,
    Required,
    // Core types
    ValidationError,
    ValidationResult,
    Validator,
    // Helpers
    is_email_shaped,
};
