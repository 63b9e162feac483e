//! Odometer library.
//!
//! Exposes the movement symbol alphabet, the distance evaluator, and the
//! driver protocol modules for use by integration tests and the binary
//! entry point.

pub mod eval;
pub mod protocol;
pub mod route;
