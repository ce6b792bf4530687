//! Schema-driven form engine for frankenform.
//!
//! A [`FieldSchema`] is an ordered, immutable list of field descriptors. A
//! [`FormSession`] owns the two mutable cells of a live form, the value map
//! and the error map, and exposes the three form operations:
//!
//! - [`FormSession::handle_change`] writes one field's raw input,
//! - [`FormSession::validate`] recomputes every field's error,
//! - [`FormSession::handle_submit`] validates and, when clean, hands the
//!   collected values to a [`SubmitSink`].
//!
//! # Example
//!
//! ```rust
//! use fform_core::{ControlInput, FieldSchema, FormSession, MemorySink, SubmitEvent, SubmitStatus};
//!
//! let mut session = FormSession::new(FieldSchema::registration());
//! session.handle_change("email", ControlInput::text("not-an-email")).unwrap();
//!
//! let mut sink = MemorySink::new();
//! let status = session.handle_submit(&mut SubmitEvent::new(), &mut sink).unwrap();
//! assert!(matches!(status, SubmitStatus::Blocked { .. }));
//! assert_eq!(session.errors().message("email").as_deref(), Some("Invalid email address"));
//! assert!(sink.delivered().is_empty());
//! ```
//!
//! # Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Emit `tracing` spans and events from change, validation, and submit |

#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod schema;
pub mod submit;
pub mod validation;
pub mod value;

pub use engine::{Blocked, Collected, FormSession, SubmitEvent, SubmitStatus, submit};
pub use error::{FormError, SchemaError};
pub use schema::{FieldDescriptor, FieldKind, FieldSchema, FieldType, SelectOption};
pub use submit::{AlertSink, MemorySink, SubmitSink, format_alert};
pub use validation::{FieldError, FormErrors, validate, validate_field};
pub use value::{ControlInput, FieldValue, FormValues};
