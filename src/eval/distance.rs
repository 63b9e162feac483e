//! Single-pass distance evaluation.
//!
//! Forward and backward steps accumulate a signed net displacement, bonus
//! markers accumulate separately, and the distance is the absolute net
//! displacement plus the bonus count. Only symbol counts matter; the order
//! of symbols within the sequence does not affect the result.

use crate::route::symbol::MoveSymbol;

/// The breakdown of a single evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Signed count of forward minus backward steps.
    pub net: i64,
    /// Count of bonus markers.
    pub bonus: u64,
}

impl Evaluation {
    /// Returns the distance: absolute net displacement plus bonus count.
    pub const fn distance(self) -> u64 {
        self.net.unsigned_abs() + self.bonus
    }
}

/// Evaluates a movement sequence into its breakdown.
///
/// Total over any input: unrecognized characters are skipped, the empty
/// sequence evaluates to zero, and no input is ever rejected.
pub fn evaluate(movements: &str) -> Evaluation {
    let mut eval = Evaluation::default();
    for c in movements.chars() {
        match MoveSymbol::from_notation_char(c) {
            Some(MoveSymbol::Forward) => eval.net += 1,
            Some(MoveSymbol::Backward) => eval.net -= 1,
            Some(MoveSymbol::Bonus) => eval.bonus += 1,
            None => {}
        }
    }
    eval
}

/// Returns the maximum distance covered by a movement sequence.
pub fn max_distance(movements: &str) -> u64 {
    evaluate(movements).distance()
}
