#![forbid(unsafe_code)]

//! Submission sinks: where collected values go after a successful submit.
//!
//! [`AlertSink`] reproduces the classic blocking notification: the text
//! `Form submitted: ` followed by the values as two-space indented JSON.
//! [`MemorySink`] keeps every delivery for later inspection.

use std::io::{self, Write};

use crate::engine::Collected;

/// Destination for collected form values.
pub trait SubmitSink {
    /// Deliver one successful submission.
    fn deliver(&mut self, collected: &Collected) -> io::Result<()>;
}

impl<S: SubmitSink + ?Sized> SubmitSink for &mut S {
    fn deliver(&mut self, collected: &Collected) -> io::Result<()> {
        (**self).deliver(collected)
    }
}

/// Render the notification text for a submission.
pub fn format_alert(collected: &Collected) -> String {
    // Serializing string-keyed maps of plain values cannot fail.
    let json = serde_json::to_string_pretty(collected).unwrap_or_else(|_| "{}".to_string());
    format!("Form submitted: {json}")
}

// ---------------------------------------------------------------------------
// AlertSink
// ---------------------------------------------------------------------------

/// Writes a `Form submitted: {json}` notification per submission.
#[derive(Debug)]
pub struct AlertSink<W: Write> {
    writer: W,
}

impl<W: Write> AlertSink<W> {
    /// Create a sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SubmitSink for AlertSink<W> {
    fn deliver(&mut self, collected: &Collected) -> io::Result<()> {
        self.writer.write_all(b"Form submitted: ")?;
        serde_json::to_writer_pretty(&mut self.writer, collected)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

// ---------------------------------------------------------------------------
// MemorySink
// ---------------------------------------------------------------------------

/// Keeps every delivered submission.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    delivered: Vec<Collected>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All deliveries, oldest first.
    pub fn delivered(&self) -> &[Collected] {
        &self.delivered
    }

    /// The most recent delivery.
    pub fn last(&self) -> Option<&Collected> {
        self.delivered.last()
    }
}

impl SubmitSink for MemorySink {
    fn deliver(&mut self, collected: &Collected) -> io::Result<()> {
        self.delivered.push(collected.clone());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
