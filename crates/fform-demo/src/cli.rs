#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo shell.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via `FFORM_DEMO_*` prefix.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::process;

use fform_core::{FieldSchema, SchemaError};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
frankenform demo: fill in and submit a form from the command line

USAGE:
    fform-demo [OPTIONS] < commands

OPTIONS:
    --schema=PATH        Load the form from a JSON field list
                         (default: built-in registration form)
    --width=N            Render width in terminal cells (default: 80)
    --log=FILTER         Tracing filter, e.g. 'fform_core=debug' (default: warn)
    --help, -h           Show this help message
    --version, -V        Show version

COMMANDS (one per line on stdin):
    set <field> <value>  Type a value into a field
    check <field>        Tick a checkbox
    uncheck <field>      Clear a checkbox
    show                 Render the form
    submit               Validate and submit
    help                 List commands
    quit                 Exit

ENVIRONMENT VARIABLES:
    FFORM_DEMO_SCHEMA    Override --schema
    FFORM_DEMO_WIDTH     Override --width
    FFORM_DEMO_LOG       Override --log (RUST_LOG is used when neither is set)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// JSON schema file; `None` selects the built-in registration form.
    pub schema: Option<PathBuf>,
    /// Render width in cells.
    pub width: usize,
    /// Tracing filter directives.
    pub log: Option<String>,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            schema: None,
            width: 80,
            log: None,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Run(Opts),
    Help,
    Version,
}

/// The command line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    UnknownArgument(String),
    InvalidWidth(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownArgument(arg) => write!(f, "Unknown argument: {arg}"),
            Self::InvalidWidth(val) => write!(f, "Invalid --width value: {val}"),
        }
    }
}

impl std::error::Error for CliError {}

impl Opts {
    /// Parse process arguments and environment, exiting on `--help`,
    /// `--version`, or bad input.
    pub fn parse() -> Self {
        let args = env::args().skip(1);
        match Self::parse_from(args, |key| env::var(key).ok()) {
            Ok(CliAction::Run(opts)) => opts,
            Ok(CliAction::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(CliAction::Version) => {
                println!("fform-demo {VERSION}");
                process::exit(0);
            }
            Err(e) => {
                eprintln!("{e}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Parse `args` (without the program name) with `env` as the variable
    /// lookup.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags. An unparseable `FFORM_DEMO_WIDTH` is
    /// ignored.
    pub fn parse_from<I, F>(args: I, env: F) -> Result<CliAction, CliError>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Some(val) = env("FFORM_DEMO_SCHEMA") {
            opts.schema = Some(PathBuf::from(val));
        }
        if let Some(val) = env("FFORM_DEMO_WIDTH")
            && let Ok(n) = val.parse()
        {
            opts.width = n;
        }
        if let Some(val) = env("FFORM_DEMO_LOG") {
            opts.log = Some(val);
        }

        // Command-line args override env vars
        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(CliAction::Help),
                "--version" | "-V" => return Ok(CliAction::Version),
                other => {
                    if let Some(val) = other.strip_prefix("--schema=") {
                        opts.schema = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--width=") {
                        opts.width = val
                            .parse()
                            .map_err(|_| CliError::InvalidWidth(val.to_string()))?;
                    } else if let Some(val) = other.strip_prefix("--log=") {
                        opts.log = Some(val.to_string());
                    } else {
                        return Err(CliError::UnknownArgument(other.to_string()));
                    }
                }
            }
        }

        Ok(CliAction::Run(opts))
    }

    /// Load the configured schema, or the built-in registration form.
    pub fn load_schema(&self) -> Result<FieldSchema, SchemaError> {
        match &self.schema {
            Some(path) => FieldSchema::from_json_file(path),
            None => Ok(FieldSchema::registration()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn default_opts() {
        let opts = Opts::default();
        assert_eq!(opts.schema, None);
        assert_eq!(opts.width, 80);
        assert_eq!(opts.log, None);
    }

    #[test]
    fn version_string_nonempty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn help_text_lists_commands() {
        for cmd in ["set <field>", "check <field>", "uncheck", "show", "submit", "quit"] {
            assert!(HELP_TEXT.contains(cmd), "missing {cmd}");
        }
    }

    #[test]
    fn flags_are_parsed() {
        let action = Opts::parse_from(
            args(&["--schema=forms/a.json", "--width=40", "--log=debug"]),
            no_env,
        )
        .unwrap();
        assert_eq!(
            action,
            CliAction::Run(Opts {
                schema: Some(PathBuf::from("forms/a.json")),
                width: 40,
                log: Some("debug".to_string()),
            })
        );
    }

    #[test]
    fn env_applies_and_flags_override() {
        let env = |key: &str| match key {
            "FFORM_DEMO_WIDTH" => Some("100".to_string()),
            "FFORM_DEMO_LOG" => Some("info".to_string()),
            _ => None,
        };
        let Ok(CliAction::Run(opts)) = Opts::parse_from(args(&["--width=30"]), env) else {
            panic!("expected run");
        };
        assert_eq!(opts.width, 30);
        assert_eq!(opts.log.as_deref(), Some("info"));
    }

    #[test]
    fn bad_env_width_is_ignored() {
        let env = |key: &str| (key == "FFORM_DEMO_WIDTH").then(|| "wide".to_string());
        let Ok(CliAction::Run(opts)) = Opts::parse_from(args(&[]), env) else {
            panic!("expected run");
        };
        assert_eq!(opts.width, 80);
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert_eq!(
            Opts::parse_from(args(&["--help", "--bogus"]), no_env),
            Ok(CliAction::Help)
        );
        assert_eq!(Opts::parse_from(args(&["-V"]), no_env), Ok(CliAction::Version));
    }

    #[test]
    fn errors() {
        assert_eq!(
            Opts::parse_from(args(&["--width=abc"]), no_env),
            Err(CliError::InvalidWidth("abc".to_string()))
        );
        assert_eq!(
            Opts::parse_from(args(&["--verbose"]), no_env),
            Err(CliError::UnknownArgument("--verbose".to_string()))
        );
    }

    #[test]
    fn missing_schema_file_is_reported() {
        let opts = Opts {
            schema: Some(PathBuf::from("/nonexistent/form.json")),
            ..Opts::default()
        };
        assert!(matches!(opts.load_schema(), Err(SchemaError::Io { .. })));
    }
}
