use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

pub mod dfa;

/// This trait represents types that can be used as states of an automaton.
pub trait AutomatonState: Debug + Copy + Clone + PartialEq + Eq + Hash {}
impl<T> AutomatonState for T where T: Debug + Copy + Clone + PartialEq + Eq + Hash {}

/// This trait represents types that can be used as input symbols of an
/// automaton. A symbol corresponds to exactly one character of raw input.
pub trait AutomatonSymbol: Debug + Copy + Clone + PartialEq + Eq + Hash {
    /// The character this symbol is written as.
    fn glyph(&self) -> char;

    /// Decodes a raw character into a symbol, if any symbol is written as it.
    /// Decoding says nothing about alphabet membership, which is a property
    /// of the individual grammar.
    fn from_glyph(c: char) -> Option<Self>;
}

impl AutomatonSymbol for char {
    fn glyph(&self) -> char {
        *self
    }

    fn from_glyph(c: char) -> Option<Self> {
        Some(c)
    }
}

/// The classification of one validation run.
///
/// `OutsideAlphabet` is a caller input error and aborts the scan at the
/// offending character. `Rejected` is a normal negative result, fully
/// computed through the sink state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Accepted,
    Rejected,
    OutsideAlphabet(char),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Verdict::Rejected)
    }

    pub fn is_input_error(&self) -> bool {
        matches!(self, Verdict::OutsideAlphabet(_))
    }

    /// The `(accepted, message)` pair handed to front-end collaborators.
    pub fn into_parts(self) -> (bool, String) {
        (self.is_accepted(), self.to_string())
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "accepted"),
            Verdict::Rejected => write!(f, "rejected"),
            Verdict::OutsideAlphabet(c) => {
                write!(f, "symbol '{}' is not in the alphabet", c)
            }
        }
    }
}
