#![forbid(unsafe_code)]

//! Parsing of the line commands read by the demo shell.

use std::fmt;

/// A single shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Type `value` into `field`.
    Set { field: String, value: String },
    /// Tick the checkbox `field`.
    Check { field: String },
    /// Clear the checkbox `field`.
    Uncheck { field: String },
    Show,
    Submit,
    Help,
    Quit,
}

/// A line could not be parsed as a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command word is not recognized.
    Unknown(String),
    /// The command needs a field name.
    MissingField(&'static str),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(word) => write!(f, "unknown command {word:?} (try 'help')"),
            Self::MissingField(cmd) => write!(f, "'{cmd}' needs a field name"),
        }
    }
}

impl std::error::Error for CommandError {}

impl Command {
    /// Parse one input line (without its line terminator).
    ///
    /// For `set`, the value is everything after the single space that follows
    /// the field name, untrimmed; `set name` alone stores an empty value.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim_start();
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        match word {
            "set" => {
                let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
                Ok(Self::Set {
                    field: required_field(field, "set")?,
                    value: value.to_string(),
                })
            }
            "check" => Ok(Self::Check {
                field: required_field(rest.trim(), "check")?,
            }),
            "uncheck" => Ok(Self::Uncheck {
                field: required_field(rest.trim(), "uncheck")?,
            }),
            "show" => Ok(Self::Show),
            "submit" => Ok(Self::Submit),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.trim_end().to_string())),
        }
    }
}

fn required_field(field: &str, cmd: &'static str) -> Result<String, CommandError> {
    if field.is_empty() {
        Err(CommandError::MissingField(cmd))
    } else {
        Ok(field.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(field: &str, value: &str) -> Command {
        Command::Set {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn set_keeps_raw_value() {
        assert_eq!(Command::parse("set email a@b.co"), Ok(set("email", "a@b.co")));
        assert_eq!(
            Command::parse("set firstName  Mary Ann "),
            Ok(set("firstName", " Mary Ann "))
        );
        assert_eq!(Command::parse("set age"), Ok(set("age", "")));
        assert_eq!(Command::parse("set age "), Ok(set("age", "")));
    }

    #[test]
    fn checkbox_commands() {
        assert_eq!(
            Command::parse("check subscribe"),
            Ok(Command::Check {
                field: "subscribe".to_string()
            })
        );
        assert_eq!(
            Command::parse("uncheck subscribe "),
            Ok(Command::Uncheck {
                field: "subscribe".to_string()
            })
        );
    }

    #[test]
    fn bare_commands() {
        assert_eq!(Command::parse("show"), Ok(Command::Show));
        assert_eq!(Command::parse("submit"), Ok(Command::Submit));
        assert_eq!(Command::parse("help"), Ok(Command::Help));
        assert_eq!(Command::parse("  quit"), Ok(Command::Quit));
    }

    #[test]
    fn missing_field() {
        assert_eq!(Command::parse("set"), Err(CommandError::MissingField("set")));
        assert_eq!(Command::parse("check "), Err(CommandError::MissingField("check")));
    }

    #[test]
    fn unknown_command() {
        let err = Command::parse("reset all").unwrap_err();
        assert_eq!(err, CommandError::Unknown("reset".to_string()));
        assert_eq!(err.to_string(), "unknown command \"reset\" (try 'help')");
    }
}
