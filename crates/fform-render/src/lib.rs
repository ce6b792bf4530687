//! Plain-text rendering for frankenform sessions.
//!
//! [`FormRenderer`] lays a [`FieldSchema`](fform_core::FieldSchema) out as
//! labelled lines sized in terminal cells, with error lines under invalid
//! fields and a trailing submit button.
//!
//! # Example
//!
//! ```rust
//! use fform_core::{ControlInput, FieldSchema, FormSession};
//! use fform_render::FormRenderer;
//!
//! let mut session = FormSession::new(FieldSchema::registration());
//! session.handle_change("subscribe", ControlInput::checked(true)).unwrap();
//!
//! let rendered = FormRenderer::new().width(60).render_session(&session);
//! assert_eq!(rendered.field_line("subscribe"), Some("Subscribe to newsletter: [x]"));
//! assert_eq!(rendered.submit_line(), Some("[ Submit ]"));
//! ```
//!
//! # Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Wrap each render in a `form_render` span |

#![forbid(unsafe_code)]

pub mod renderer;
pub mod text;

pub use renderer::{FormRenderer, LineKind, RenderedForm, RenderedLine};
