#![forbid(unsafe_code)]

//! The per-field error map produced by a validation pass.

use super::validators::ValidationError;

/// A validation error attached to a named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name.
    pub field: String,
    /// The error recorded for the field.
    pub error: ValidationError,
}

impl FieldError {
    /// The formatted, human-readable message.
    pub fn message(&self) -> String {
        self.error.format_message()
    }
}

/// Current validation errors, at most one per field, in schema order.
///
/// Always rebuilt wholesale by [`validate`](super::validate); never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    entries: Vec<FieldError>,
}

impl FormErrors {
    /// Create an empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field, replacing any earlier one for that field.
    pub fn insert(&mut self, field: impl Into<String>, error: ValidationError) {
        let field = field.into();
        match self.entries.iter_mut().find(|e| e.field == field) {
            Some(slot) => slot.error = error,
            None => self.entries.push(FieldError { field, error }),
        }
    }

    /// The error for a field, if any.
    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.entries
            .iter()
            .find(|e| e.field == field)
            .map(|e| &e.error)
    }

    /// The formatted message for a field, if any.
    pub fn message(&self, field: &str) -> Option<String> {
        self.get(field).map(ValidationError::format_message)
    }

    /// Whether the field has an error.
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Whether no field has an error.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of fields with an error.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate errors in schema order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.entries.iter()
    }

    /// Names of the fields with an error.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.field.as_str())
    }
}

impl<'a> IntoIterator for &'a FormErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_one_error_per_field() {
        let mut errors = FormErrors::new();
        errors.insert("email", ValidationError::new("required", "This field is required"));
        errors.insert("age", ValidationError::new("too_small", "Minimum value is 0"));
        errors.insert("email", ValidationError::new("email", "Invalid email address"));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.message("email").as_deref(), Some("Invalid email address"));
        assert_eq!(errors.fields().collect::<Vec<_>>(), ["email", "age"]);
    }

    #[test]
    fn lookup_missing_field() {
        let errors = FormErrors::new();
        assert!(errors.is_empty());
        assert!(!errors.contains("email"));
        assert!(errors.message("email").is_none());
    }
}
