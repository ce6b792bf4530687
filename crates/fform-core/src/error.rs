#![forbid(unsafe_code)]

//! Error types for schema construction and form sessions.
//!
//! Field validation failures are not errors in this sense: they are values in
//! [`FormErrors`](crate::FormErrors) and never propagate.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// A field schema could not be built or loaded.
#[derive(Debug)]
pub enum SchemaError {
    /// A descriptor at `index` has an empty name.
    EmptyName { index: usize },
    /// Two descriptors share a name.
    DuplicateName(String),
    /// A select descriptor declares no options.
    MissingOptions(String),
    /// The schema document is not valid JSON for a field list.
    Parse(serde_json::Error),
    /// The schema file could not be read.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName { index } => write!(f, "field #{index} has an empty name"),
            Self::DuplicateName(name) => write!(f, "duplicate field name {name:?}"),
            Self::MissingOptions(name) => write!(f, "select field {name:?} has no options"),
            Self::Parse(e) => write!(f, "invalid schema: {e}"),
            Self::Io { path, source } => {
                write!(f, "cannot read schema {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SchemaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// A form session operation failed.
#[derive(Debug)]
pub enum FormError {
    /// The named field is not part of the schema.
    UnknownField(String),
    /// The submission sink failed to deliver collected values.
    Sink(io::Error),
    /// The schema backing the session could not be built.
    Schema(SchemaError),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownField(name) => write!(f, "unknown field {name:?}"),
            Self::Sink(e) => write!(f, "submission failed: {e}"),
            Self::Schema(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Sink(e) => Some(e),
            Self::Schema(e) => Some(e),
            Self::UnknownField(_) => None,
        }
    }
}

impl From<io::Error> for FormError {
    fn from(e: io::Error) -> Self {
        Self::Sink(e)
    }
}

impl From<SchemaError> for FormError {
    fn from(e: SchemaError) -> Self {
        Self::Schema(e)
    }
}
