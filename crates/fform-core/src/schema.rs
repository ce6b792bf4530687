#![forbid(unsafe_code)]

//! Field descriptors and the ordered field schema.
//!
//! A schema is defined once at startup and never mutated. Its order is the
//! render order and the validation order.
//!
//! Schemas can be written in Rust with the descriptor constructors or loaded
//! from JSON in the form-config shape:
//!
//! ```json
//! [
//!   { "name": "email", "label": "Email", "type": "email", "required": true },
//!   { "name": "password", "label": "Password", "type": "password", "minLength": 6 },
//!   { "name": "age", "label": "Age", "type": "number", "min": 0 },
//!   { "name": "gender", "label": "Gender", "type": "select",
//!     "options": [{ "value": "", "label": "Select Gender" }, { "value": "male", "label": "Male" }] },
//!   { "name": "subscribe", "label": "Subscribe", "type": "checkbox" }
//! ]
//! ```

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

// ---------------------------------------------------------------------------
// FieldType / FieldKind
// ---------------------------------------------------------------------------

/// Presentation type of a field, without its constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Password,
    Number,
    Select,
    Checkbox,
}

impl FieldType {
    /// The lowercase type name used in schema documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a select field's option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Value stored when the option is chosen.
    pub value: String,
    /// Text shown for the option.
    pub label: String,
}

impl SelectOption {
    /// Create a select option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Field type together with the constraints that apply to it.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Email address input.
    Email,
    /// Masked input with an optional minimum character count.
    Password { min_length: Option<usize> },
    /// Numeric input with an optional inclusive minimum.
    Number { min: Option<f64> },
    /// Single choice from an ordered option list.
    Select { options: Vec<SelectOption> },
    /// Boolean toggle.
    Checkbox,
}

impl FieldKind {
    /// The constraint-free type discriminant.
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Text => FieldType::Text,
            Self::Email => FieldType::Email,
            Self::Password { .. } => FieldType::Password,
            Self::Number { .. } => FieldType::Number,
            Self::Select { .. } => FieldType::Select,
            Self::Checkbox => FieldType::Checkbox,
        }
    }
}

// ---------------------------------------------------------------------------
// FieldDescriptor
// ---------------------------------------------------------------------------

/// A single field definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FieldConfig", into = "FieldConfig")]
pub struct FieldDescriptor {
    /// Unique key of the field.
    pub name: String,
    /// Label shown next to the control.
    pub label: String,
    /// Whether the field must hold a truthy value (for checkboxes: be checked).
    pub required: bool,
    /// Presentation type and its constraints.
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Create an optional field of the given kind.
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            required: false,
            kind,
        }
    }

    /// Create a text field.
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    /// Create an email field.
    pub fn email(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    /// Create a password field with an optional minimum length.
    pub fn password(
        name: impl Into<String>,
        label: impl Into<String>,
        min_length: Option<usize>,
    ) -> Self {
        Self::new(name, label, FieldKind::Password { min_length })
    }

    /// Create a number field with an optional minimum.
    pub fn number(name: impl Into<String>, label: impl Into<String>, min: Option<f64>) -> Self {
        Self::new(name, label, FieldKind::Number { min })
    }

    /// Create a select field.
    pub fn select(
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        Self::new(name, label, FieldKind::Select { options })
    }

    /// Create a checkbox field.
    pub fn checkbox(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Checkbox)
    }

    /// Mark the field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// The field's type discriminant.
    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    /// Options of a select field (empty for other kinds).
    pub fn options(&self) -> &[SelectOption] {
        match &self.kind {
            FieldKind::Select { options } => options,
            _ => &[],
        }
    }
}

/// Wire shape of a descriptor in schema documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FieldConfig {
    name: String,
    label: String,
    #[serde(rename = "type")]
    field_type: FieldType,
    #[serde(default)]
    required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Vec<SelectOption>>,
}

impl TryFrom<FieldConfig> for FieldDescriptor {
    type Error = SchemaError;

    fn try_from(config: FieldConfig) -> Result<Self, Self::Error> {
        // Constraints that do not belong to the declared type are ignored.
        let kind = match config.field_type {
            FieldType::Text => FieldKind::Text,
            FieldType::Email => FieldKind::Email,
            FieldType::Password => FieldKind::Password {
                min_length: config.min_length,
            },
            FieldType::Number => FieldKind::Number { min: config.min },
            FieldType::Select => FieldKind::Select {
                options: config
                    .options
                    .ok_or_else(|| SchemaError::MissingOptions(config.name.clone()))?,
            },
            FieldType::Checkbox => FieldKind::Checkbox,
        };
        Ok(Self {
            name: config.name,
            label: config.label,
            required: config.required,
            kind,
        })
    }
}

impl From<FieldDescriptor> for FieldConfig {
    fn from(field: FieldDescriptor) -> Self {
        let field_type = field.field_type();
        let (min_length, min, options) = match field.kind {
            FieldKind::Password { min_length } => (min_length, None, None),
            FieldKind::Number { min } => (None, min, None),
            FieldKind::Select { options } => (None, None, Some(options)),
            FieldKind::Text | FieldKind::Email | FieldKind::Checkbox => (None, None, None),
        };
        Self {
            name: field.name,
            label: field.label,
            field_type,
            required: field.required,
            min_length,
            min,
            options,
        }
    }
}

// ---------------------------------------------------------------------------
// FieldSchema
// ---------------------------------------------------------------------------

/// Ordered, immutable list of field descriptors.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    fields: Vec<FieldDescriptor>,
}

impl FieldSchema {
    /// Build a schema, rejecting empty or duplicate field names.
    pub fn new(fields: Vec<FieldDescriptor>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::with_capacity(fields.len());
        for (index, field) in fields.iter().enumerate() {
            if field.name.is_empty() {
                return Err(SchemaError::EmptyName { index });
            }
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateName(field.name.clone()));
            }
        }
        Ok(Self { fields })
    }

    /// The registration form: name, email, password, age, gender, newsletter.
    pub fn registration() -> Self {
        Self {
            fields: vec![
                FieldDescriptor::text("firstName", "First Name").required(),
                FieldDescriptor::text("lastName", "Last Name").required(),
                FieldDescriptor::email("email", "Email").required(),
                FieldDescriptor::password("password", "Password", Some(6)).required(),
                FieldDescriptor::number("age", "Age", Some(0.0)),
                FieldDescriptor::select(
                    "gender",
                    "Gender",
                    vec![
                        SelectOption::new("", "Select Gender"),
                        SelectOption::new("male", "Male"),
                        SelectOption::new("female", "Female"),
                        SelectOption::new("other", "Other"),
                    ],
                )
                .required(),
                FieldDescriptor::checkbox("subscribe", "Subscribe to newsletter"),
            ],
        }
    }

    /// Parse a schema from a JSON field list.
    pub fn from_json_str(json: &str) -> Result<Self, SchemaError> {
        let fields: Vec<FieldDescriptor> = serde_json::from_str(json)?;
        Self::new(fields)
    }

    /// Read and parse a schema file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Serialize the schema back to its JSON field list.
    pub fn to_json_pretty(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(&self.fields)?)
    }

    /// Look up a descriptor by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Whether the schema declares a field with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// All descriptors in render order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Iterate descriptors in render order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldDescriptor> {
        self.fields.iter()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for &'a FieldSchema {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
