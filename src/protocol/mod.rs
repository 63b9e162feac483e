//! Line protocol for the evaluator driver.
//!
//! Implements parsing of host commands and formatting of responses for
//! the stdin/stdout loop in the binary entry point.

pub mod parser;
pub mod report;

pub use parser::{parse_command, Command, CommandError};
pub use report::{format_distance, format_report, Report};
