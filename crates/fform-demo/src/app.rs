#![forbid(unsafe_code)]

//! The demo shell: reads commands, drives a form session, prints results.

use std::io::{self, BufRead, Write};

use fform_core::{
    AlertSink, ControlInput, FieldSchema, FormError, FormSession, SubmitEvent, SubmitStatus,
};
use fform_render::FormRenderer;

use crate::cli::Opts;
use crate::command::Command;

const COMMANDS_HELP: &str = "\
commands:
  set <field> <value>   type a value into a field
  check <field>         tick a checkbox
  uncheck <field>       clear a checkbox
  show                  render the form
  submit                validate and submit
  help                  this list
  quit                  exit";

/// Whether the shell should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A form session plus the renderer used to display it.
#[derive(Debug, Clone)]
pub struct DemoApp {
    session: FormSession,
    renderer: FormRenderer,
}

impl DemoApp {
    /// Create a shell for `schema`, rendering at `width` cells.
    pub fn new(schema: FieldSchema, width: usize) -> Self {
        Self {
            session: FormSession::new(schema),
            renderer: FormRenderer::new().width(width),
        }
    }

    /// Build the shell described by the command-line options.
    pub fn from_opts(opts: &Opts) -> Result<Self, FormError> {
        let schema = opts.load_schema()?;
        tracing::debug!(fields = schema.len(), width = opts.width, "schema loaded");
        Ok(Self::new(schema, opts.width))
    }

    /// The underlying session.
    pub fn session(&self) -> &FormSession {
        &self.session
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Bad commands and unknown fields print an `error:` line and the loop
    /// continues; only I/O failures end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let flow = match Command::parse(&line) {
                Ok(cmd) => self.execute(cmd, out)?,
                Err(e) => {
                    writeln!(out, "error: {e}")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }
        out.flush()
    }

    /// Execute one command, writing its output to `out`.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<Flow> {
        tracing::trace!(?cmd, "execute");

        let result = match cmd {
            Command::Set { field, value } => {
                self.session.handle_change(&field, ControlInput::text(value))
            }
            Command::Check { field } => {
                self.session.handle_change(&field, ControlInput::checked(true))
            }
            Command::Uncheck { field } => {
                self.session.handle_change(&field, ControlInput::checked(false))
            }
            Command::Show => {
                write!(out, "{}", self.renderer.render_session(&self.session))?;
                Ok(())
            }
            Command::Submit => self.submit(out),
            Command::Help => {
                writeln!(out, "{COMMANDS_HELP}")?;
                Ok(())
            }
            Command::Quit => return Ok(Flow::Quit),
        };

        match result {
            Ok(()) => {}
            Err(FormError::Sink(e)) => return Err(e),
            Err(e) => {
                tracing::warn!(error = %e, "command rejected");
                writeln!(out, "error: {e}")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn submit<W: Write>(&mut self, out: &mut W) -> Result<(), FormError> {
        let mut event = SubmitEvent::new();
        let mut sink = AlertSink::new(&mut *out);
        let status = self.session.handle_submit(&mut event, &mut sink)?;
        if let SubmitStatus::Blocked { invalid } = status {
            writeln!(out, "{invalid} field(s) need attention")?;
            write!(out, "{}", self.renderer.render_session(&self.session))?;
        }
        Ok(())
    }
}
