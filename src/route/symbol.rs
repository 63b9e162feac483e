//! Movement symbols.
//!
//! The single-character alphabet understood by the distance evaluator.
//! Characters outside the alphabet carry no movement information and are
//! skipped during evaluation rather than rejected.

/// A recognized movement symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveSymbol {
    /// One step forward.
    Forward,
    /// One step backward.
    Backward,
    /// A bonus marker, always counted toward the distance.
    Bonus,
}

impl MoveSymbol {
    /// Returns the single-character notation for this symbol.
    pub const fn notation_char(self) -> char {
        match self {
            MoveSymbol::Forward => '>',
            MoveSymbol::Backward => '<',
            MoveSymbol::Bonus => '*',
        }
    }

    /// Parses a symbol from its single-character notation.
    ///
    /// Returns `None` for any character outside the alphabet. Track
    /// decoration such as `'S'`, `'.'`, and `'|'` falls through here and
    /// is ignored by the evaluator.
    pub fn from_notation_char(c: char) -> Option<MoveSymbol> {
        match c {
            '>' => Some(MoveSymbol::Forward),
            '<' => Some(MoveSymbol::Backward),
            '*' => Some(MoveSymbol::Bonus),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_notation_roundtrip() {
        for sym in [MoveSymbol::Forward, MoveSymbol::Backward, MoveSymbol::Bonus] {
            assert_eq!(MoveSymbol::from_notation_char(sym.notation_char()), Some(sym));
        }
    }

    #[test]
    fn unrecognized_chars_return_none() {
        for c in ['S', '.', '|', ' ', 'x', '0'] {
            assert_eq!(MoveSymbol::from_notation_char(c), None);
        }
    }
}
