#![forbid(unsafe_code)]

//! Field values and the insertion-ordered value map of a form.
//!
//! Values are stored exactly as the control produced them. Numeric and
//! truthiness interpretation happens only when a validator asks for it, using
//! the coercion rules of browser form controls:
//!
//! | Value | Truthy | Numeric |
//! |-------|--------|---------|
//! | `Text("")` | no | `0` |
//! | `Text("0")` | yes | `0` |
//! | `Text("abc")` | yes | `NaN` |
//! | `Number(0)` / `Number(NaN)` | no | itself |
//! | `Bool(b)` | `b` | `1` / `0` |

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::schema::FieldType;

/// Largest integer an `f64` represents exactly; beyond it numbers serialize as floats.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

// ---------------------------------------------------------------------------
// FieldValue
// ---------------------------------------------------------------------------

/// A single stored field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Raw string from a text-like control (text, email, password, number, select).
    Text(String),
    /// Numeric value supplied programmatically.
    Number(f64),
    /// Checked-state of a checkbox.
    Bool(bool),
}

impl FieldValue {
    /// Create a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Whether the value counts as "present" for required and type checks.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Bool(b) => *b,
        }
    }

    /// The underlying string for text values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric interpretation of the value (`NaN` when it is not a number).
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Text(s) => parse_number(s),
            Self::Number(n) => *n,
            Self::Bool(true) => 1.0,
            Self::Bool(false) => 0.0,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::Number(n) if !n.is_finite() => serializer.serialize_unit(),
            Self::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

/// Parse a control string into a number the way a browser coerces it.
///
/// Surrounding whitespace is ignored, the empty string is `0`, `0x`/`0o`/`0b`
/// prefixes select a radix, and anything else that is not a decimal literal
/// is `NaN`.
pub fn parse_number(raw: &str) -> f64 {
    let s = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix_digits(&s[2..], radix);
    }

    let is_decimal = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if is_decimal {
        s.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// Digits after a radix prefix. No sign is allowed, and values past `u64`
/// keep growing as `f64` instead of failing.
fn parse_radix_digits(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut acc = 0.0_f64;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else {
            return f64::NAN;
        };
        acc = acc * f64::from(radix) + f64::from(d);
    }
    acc
}

/// Format a number the way it appears in messages: no trailing `.0`, no `-0`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let label = if n > 0.0 { "Infinity" } else { "-Infinity" };
        label.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        format!("{n}")
    }
}

// ---------------------------------------------------------------------------
// ControlInput
// ---------------------------------------------------------------------------

/// Raw input reported by a control on change.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlInput {
    /// The control's current value.
    Value(FieldValue),
    /// The control's checked-state.
    Checked(bool),
}

impl ControlInput {
    /// Text typed or selected in a control.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Value(FieldValue::Text(value.into()))
    }

    /// A numeric value set programmatically.
    pub fn number(value: f64) -> Self {
        Self::Value(FieldValue::Number(value))
    }

    /// A checkbox toggle.
    pub fn checked(checked: bool) -> Self {
        Self::Checked(checked)
    }
}

// ---------------------------------------------------------------------------
// FormValues
// ---------------------------------------------------------------------------

/// Current field values keyed by field name.
///
/// Entries keep the position of their first write; later writes overwrite in
/// place. Fields that were never changed are absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    entries: Vec<(String, FieldValue)>,
}

impl FormValues {
    /// Create an empty value map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a value by field name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Whether the field holds a truthy value. Absent fields are falsy.
    pub fn is_truthy(&self, name: &str) -> bool {
        self.get(name).is_some_and(FieldValue::is_truthy)
    }

    /// Store a value, replacing only the entry for `name`.
    pub fn set(&mut self, name: impl Into<String>, value: FieldValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Apply a control change for a field of the given type.
    ///
    /// Checkbox fields store their checked-state; every other field stores the
    /// input untouched (no trimming, no numeric coercion).
    pub fn apply_change(&mut self, name: &str, input: ControlInput, field_type: FieldType) {
        let value = match (field_type, input) {
            (FieldType::Checkbox, ControlInput::Checked(checked)) => FieldValue::Bool(checked),
            (FieldType::Checkbox, ControlInput::Value(v)) => FieldValue::Bool(v.is_truthy()),
            (_, ControlInput::Value(v)) => v,
            (_, ControlInput::Checked(checked)) => FieldValue::Bool(checked),
        };
        self.set(name, value);
    }

    /// Number of stored fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no field has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, FieldValue)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (name, value) in iter {
            values.set(name, value);
        }
        values
    }
}

impl Serialize for FormValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
