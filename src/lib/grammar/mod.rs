use std::fmt::Display;

use crate::automaton::AutomatonSymbol;

pub mod grouped;
pub mod linear;

/// The symbols of the modal-logic surface syntax. Both grammars draw their
/// alphabets from this set; [grouped] uses all of it, [linear] leaves out
/// the parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalSymbol {
    PropA,
    PropB,
    Necessity,
    Possibility,
    Conjunction,
    Disjunction,
    Negation,
    Implication,
    OpenParen,
    CloseParen,
}

impl AutomatonSymbol for ModalSymbol {
    fn glyph(&self) -> char {
        match self {
            ModalSymbol::PropA => 'A',
            ModalSymbol::PropB => 'B',
            ModalSymbol::Necessity => '□',
            ModalSymbol::Possibility => '◇',
            ModalSymbol::Conjunction => '∧',
            ModalSymbol::Disjunction => '∨',
            ModalSymbol::Negation => '¬',
            ModalSymbol::Implication => '→',
            ModalSymbol::OpenParen => '(',
            ModalSymbol::CloseParen => ')',
        }
    }

    fn from_glyph(c: char) -> Option<Self> {
        match c {
            'A' => Some(ModalSymbol::PropA),
            'B' => Some(ModalSymbol::PropB),
            '□' => Some(ModalSymbol::Necessity),
            '◇' => Some(ModalSymbol::Possibility),
            '∧' => Some(ModalSymbol::Conjunction),
            '∨' => Some(ModalSymbol::Disjunction),
            '¬' => Some(ModalSymbol::Negation),
            '→' => Some(ModalSymbol::Implication),
            '(' => Some(ModalSymbol::OpenParen),
            ')' => Some(ModalSymbol::CloseParen),
            _ => None,
        }
    }
}

impl Display for ModalSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
