#![forbid(unsafe_code)]

//! The form session: live values, current errors, change and submit handling.
//!
//! # Invariants
//!
//! 1. **Isolation**: a change writes exactly one entry of the value map.
//! 2. **Derived errors**: the error map is only ever replaced wholesale by a
//!    validation pass; changes never touch it, so errors shown after a submit
//!    stay until the next submit.
//! 3. **Read-only validation**: validating never mutates values.
//! 4. **No reset**: a successful submit leaves values and errors as they are.

use std::fmt;

use serde::Serialize;

use crate::error::FormError;
use crate::schema::FieldSchema;
use crate::submit::SubmitSink;
use crate::validation::{FormErrors, validate};
use crate::value::{ControlInput, FormValues};

// ---------------------------------------------------------------------------
// Submission outcomes
// ---------------------------------------------------------------------------

/// Snapshot of the form values taken by a successful submit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Collected {
    values: FormValues,
}

impl Collected {
    /// The collected values.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Take the collected values.
    pub fn into_values(self) -> FormValues {
        self.values
    }
}

/// A submit that failed validation, with the errors that blocked it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blocked {
    errors: FormErrors,
}

impl Blocked {
    /// The errors that blocked the submit.
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Take the errors.
    pub fn into_errors(self) -> FormErrors {
        self.errors
    }
}

impl fmt::Display for Blocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "submission blocked by {} invalid field(s)", self.errors.len())
    }
}

impl std::error::Error for Blocked {}

/// Validate `values` and, if clean, collect them.
pub fn submit(values: &FormValues, schema: &FieldSchema) -> Result<Collected, Blocked> {
    let errors = validate(values, schema);
    if errors.is_empty() {
        Ok(Collected {
            values: values.clone(),
        })
    } else {
        Err(Blocked { errors })
    }
}

// ---------------------------------------------------------------------------
// SubmitEvent
// ---------------------------------------------------------------------------

/// The event that triggered a submit.
///
/// The session suppresses the event's default action (page navigation for a
/// browser form) before validating.
#[derive(Debug, Clone, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    /// Create a fresh submit event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the default action.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether the default action was suppressed.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Result of [`FormSession::handle_submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// The values passed validation and were delivered to the sink.
    Submitted,
    /// Validation failed on `invalid` fields; nothing was delivered.
    Blocked { invalid: usize },
}

// ---------------------------------------------------------------------------
// FormSession
// ---------------------------------------------------------------------------

/// A live form: schema, current values, current errors, touched fields.
#[derive(Debug, Clone)]
pub struct FormSession {
    schema: FieldSchema,
    values: FormValues,
    errors: FormErrors,
    /// Per-field touched state, indexed like the schema.
    touched: Vec<bool>,
}

impl FormSession {
    /// Start an empty session for a schema.
    pub fn new(schema: FieldSchema) -> Self {
        let touched = vec![false; schema.len()];
        Self {
            schema,
            values: FormValues::new(),
            errors: FormErrors::new(),
            touched,
        }
    }

    /// The schema driving this session.
    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    /// Current values.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Errors from the most recent validation pass.
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Apply a control change to the named field.
    ///
    /// No validation runs here; the error map is left as it was.
    pub fn handle_change(&mut self, name: &str, input: ControlInput) -> Result<(), FormError> {
        let index = self
            .schema
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        let field_type = self.schema.fields()[index].field_type();

        #[cfg(feature = "tracing")]
        tracing::debug!(field = name, field_type = %field_type, "field changed");

        self.values.apply_change(name, input, field_type);
        self.touched[index] = true;
        Ok(())
    }

    /// Recompute the error map from the current values.
    pub fn validate(&mut self) -> &FormErrors {
        self.errors = validate(&self.values, &self.schema);
        &self.errors
    }

    /// Validate and collect; the new error map replaces the session's.
    pub fn submit(&mut self) -> Result<Collected, Blocked> {
        let result = submit(&self.values, &self.schema);
        self.errors = match &result {
            Ok(_) => FormErrors::new(),
            Err(blocked) => blocked.errors().clone(),
        };
        result
    }

    /// Handle a submit event: suppress its default action, validate, and on
    /// success deliver the collected values to `sink`.
    pub fn handle_submit<S: SubmitSink + ?Sized>(
        &mut self,
        event: &mut SubmitEvent,
        sink: &mut S,
    ) -> Result<SubmitStatus, FormError> {
        event.prevent_default();
        match self.submit() {
            Ok(collected) => {
                #[cfg(feature = "tracing")]
                tracing::info!(fields = collected.values().len(), "form submitted");

                sink.deliver(&collected)?;
                Ok(SubmitStatus::Submitted)
            }
            Err(blocked) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(invalid = blocked.errors().len(), "form submit blocked");

                Ok(SubmitStatus::Blocked {
                    invalid: blocked.errors().len(),
                })
            }
        }
    }

    /// Whether the named field has been changed at least once.
    pub fn is_touched(&self, name: &str) -> bool {
        self.schema
            .iter()
            .position(|f| f.name == name)
            .is_some_and(|i| self.touched[i])
    }

    /// Names of all touched fields, in schema order.
    pub fn touched_fields(&self) -> Vec<&str> {
        self.schema
            .iter()
            .zip(&self.touched)
            .filter_map(|(f, &t)| t.then_some(f.name.as_str()))
            .collect()
    }

    /// Whether no field has been changed yet.
    pub fn is_pristine(&self) -> bool {
        !self.touched.iter().any(|&t| t)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
