#![forbid(unsafe_code)]

//! Line-driven demo shell for frankenform.
//!
//! The binary reads one command per line from stdin, applies it to a
//! [`FormSession`](fform_core::FormSession), and writes rendered forms and
//! submission notices to stdout. Logging goes to stderr.

pub mod app;
pub mod cli;
pub mod command;
pub mod logging;

pub use app::{DemoApp, Flow};
pub use command::{Command, CommandError};
