#![forbid(unsafe_code)]

//! Line-oriented form renderer.
//!
//! Each field renders as `Label*: value` with labels padded to a shared
//! column. Fields with an error get an indented error line beneath them, and
//! the form ends with a submit button line.

use std::fmt;

use fform_core::value::format_number;
use fform_core::{
    FieldDescriptor, FieldKind, FieldSchema, FieldValue, FormErrors, FormSession, FormValues,
};

use crate::text::{clip, display_width, mask, pad_to};

const DEFAULT_WIDTH: usize = 80;
const DEFAULT_MASK: char = '*';
const ERROR_MARKER: &str = "\u{26A0} ";

// ---------------------------------------------------------------------------
// Rendered output
// ---------------------------------------------------------------------------

/// What a rendered line shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A field's label and current value.
    Field { name: String },
    /// The error message for a field.
    Error { name: String },
    /// The submit button.
    Submit,
}

/// One line of rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub kind: LineKind,
    pub text: String,
}

/// A rendered form: field lines, error lines, and the submit line, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedForm {
    lines: Vec<RenderedLine>,
}

impl RenderedForm {
    /// All lines in display order.
    pub fn lines(&self) -> &[RenderedLine] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing was rendered.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text of the named field's line.
    pub fn field_line(&self, name: &str) -> Option<&str> {
        self.find(|kind| matches!(kind, LineKind::Field { name: n } if n == name))
    }

    /// Text of the named field's error line, if it has one.
    pub fn error_line(&self, name: &str) -> Option<&str> {
        self.find(|kind| matches!(kind, LineKind::Error { name: n } if n == name))
    }

    /// Text of the submit line.
    pub fn submit_line(&self) -> Option<&str> {
        self.find(|kind| *kind == LineKind::Submit)
    }

    fn find(&self, pred: impl Fn(&LineKind) -> bool) -> Option<&str> {
        self.lines
            .iter()
            .find(|l| pred(&l.kind))
            .map(|l| l.text.as_str())
    }
}

impl fmt::Display for RenderedForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line.text)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FormRenderer
// ---------------------------------------------------------------------------

/// Renders a schema with its values and errors to plain text lines.
#[derive(Debug, Clone)]
pub struct FormRenderer {
    width: usize,
    /// Label column width including the `": "` separator; 0 means auto.
    label_width: usize,
    mask: char,
    submit_label: String,
}

impl Default for FormRenderer {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            label_width: 0,
            mask: DEFAULT_MASK,
            submit_label: "Submit".to_string(),
        }
    }
}

impl FormRenderer {
    /// Create a renderer with the default width (80 cells) and auto label column.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum line width in cells.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Fixed label column width including the `": "` separator.
    pub fn label_width(mut self, width: usize) -> Self {
        self.label_width = width;
        self
    }

    /// Glyph shown per password character.
    pub fn mask(mut self, glyph: char) -> Self {
        self.mask = glyph;
        self
    }

    /// Text inside the submit button.
    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    /// Render a live session.
    pub fn render_session(&self, session: &FormSession) -> RenderedForm {
        self.render(session.schema(), session.values(), session.errors())
    }

    /// Render `schema` with the given values and errors.
    pub fn render(
        &self,
        schema: &FieldSchema,
        values: &FormValues,
        errors: &FormErrors,
    ) -> RenderedForm {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "form_render",
            fields = schema.len(),
            errors = errors.len(),
            width = self.width
        )
        .entered();

        let label_w = self.effective_label_width(schema);
        let mut lines = Vec::with_capacity(schema.len() + errors.len() + 1);

        for field in schema {
            let label = clip(&label_text(field), label_w.saturating_sub(2));
            let head = pad_to(&format!("{label}: "), label_w);
            let value = self.value_text(field, values.get(&field.name));
            lines.push(RenderedLine {
                kind: LineKind::Field {
                    name: field.name.clone(),
                },
                text: clip(&format!("{head}{value}"), self.width),
            });

            if let Some(message) = errors.message(&field.name) {
                let text = format!("{}{ERROR_MARKER}{message}", " ".repeat(label_w));
                lines.push(RenderedLine {
                    kind: LineKind::Error {
                        name: field.name.clone(),
                    },
                    text: clip(&text, self.width),
                });
            }
        }

        lines.push(RenderedLine {
            kind: LineKind::Submit,
            text: clip(&format!("[ {} ]", self.submit_label), self.width),
        });

        RenderedForm { lines }
    }

    /// Compute the effective label column width.
    fn effective_label_width(&self, schema: &FieldSchema) -> usize {
        if self.label_width > 0 {
            return self.label_width;
        }
        schema
            .iter()
            .map(|f| display_width(&label_text(f)))
            .max()
            .unwrap_or(0)
            .saturating_add(2) // ": " suffix
    }

    fn value_text(&self, field: &FieldDescriptor, value: Option<&FieldValue>) -> String {
        let shown = value
            .filter(|v| v.is_truthy())
            .map(ToString::to_string)
            .unwrap_or_default();

        match &field.kind {
            FieldKind::Text | FieldKind::Email => shown,
            FieldKind::Password { .. } => mask(&shown, self.mask),
            FieldKind::Number { min: Some(min) } => {
                let hint = format!("(min {})", format_number(*min));
                if shown.is_empty() {
                    hint
                } else {
                    format!("{shown} {hint}")
                }
            }
            FieldKind::Number { min: None } => shown,
            FieldKind::Select { options } => options
                .iter()
                .find(|o| o.value == shown)
                .map(|o| o.label.clone())
                .unwrap_or(shown),
            FieldKind::Checkbox => {
                let indicator = if value.is_some_and(FieldValue::is_truthy) {
                    "[x]"
                } else {
                    "[ ]"
                };
                indicator.to_string()
            }
        }
    }
}

/// Field label with the required marker.
fn label_text(field: &FieldDescriptor) -> String {
    if field.required {
        format!("{}*", field.label)
    } else {
        field.label.clone()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
