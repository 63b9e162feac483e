//! Driver command parser.
//!
//! Parses incoming lines from the host into structured `Command` variants
//! that the main loop can dispatch on.

use thiserror::Error;

/// Errors that can occur when parsing a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty input")]
    EmptyInput,

    #[error("unknown command: '{0}'")]
    UnknownCommand(String),

    #[error("missing movement sequence after '{0}'")]
    MissingSequence(&'static str),
}

/// A parsed host-to-evaluator command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Evaluate a movement sequence and respond with its distance.
    Eval { movements: String },

    /// Evaluate a movement sequence and respond with the full breakdown
    /// as a single JSON line.
    Report { movements: String },

    /// Terminate the evaluator process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// The movement sequence is everything after the command word, trimmed of
/// surrounding whitespace. It may contain any characters at all; the
/// evaluator ignores the ones it does not recognize.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(CommandError::EmptyInput);
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match word {
        "quit" => Ok(Command::Quit),
        "eval" => parse_sequence(rest, "eval").map(|movements| Command::Eval { movements }),
        "report" => parse_sequence(rest, "report").map(|movements| Command::Report { movements }),
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

/// Extracts the movement sequence argument for `eval` and `report`.
fn parse_sequence(rest: &str, command: &'static str) -> Result<String, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingSequence(command));
    }
    Ok(rest.to_string())
}
