//! Distance evaluation.
//!
//! Reduces a movement sequence to a scalar distance and exposes the
//! per-sequence breakdown used by the driver protocol.

pub mod distance;

pub use distance::{evaluate, max_distance, Evaluation};
