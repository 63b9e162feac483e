//! Odometer -- a movement-sequence distance evaluator.
//!
//! This binary reads commands from stdin and writes responses to stdout,
//! one line per command.

use std::io::{self, BufRead, Write};

use odometer::eval::evaluate;
use odometer::protocol::parser::{parse_command, Command, CommandError};
use odometer::protocol::report::{format_distance, format_report};

/// Runs the main protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Ok(c) => c,
            Err(CommandError::EmptyInput) => continue,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match cmd {
            Command::Eval { movements } => {
                writeln!(out, "{}", format_distance(evaluate(&movements))).unwrap();
                out.flush().unwrap();
            }
            Command::Report { movements } => {
                writeln!(out, "{}", format_report(evaluate(&movements))).unwrap();
                out.flush().unwrap();
            }
            Command::Quit => {
                break;
            }
        }
    }
}
