//! The implication-and-negation grammar: atoms, negation prefixing an atom
//! or a modal expression, modal operators, and right-associating
//! implication/conjunction/disjunction chains. No parentheses: `'('` and
//! `')'` are outside this alphabet entirely, so they surface as alphabet
//! errors rather than rejections.

use crate::automaton::dfa::{Dfa, GrammarError};
use crate::grammar::ModalSymbol::{self, *};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinearState {
    /// Awaiting a proposition. Not accepting: the empty formula and any
    /// formula ending in a dangling connective are rejected.
    Start,
    /// After a modal operator, an atom must follow.
    Modal,
    /// After a negation, an atom or a modal operator must follow.
    Negated,
    /// Just completed a proposition. The only accepting state.
    Prop,
    Sink,
}

pub fn grammar() -> Result<Dfa<LinearState, ModalSymbol>, GrammarError> {
    use LinearState::*;

    Dfa::builder(
        vec![
            PropA,
            PropB,
            Necessity,
            Possibility,
            Conjunction,
            Disjunction,
            Negation,
            Implication,
        ],
        Start,
        Sink,
    )
    .accepting(Prop)
    // a proposition: atom, negated or modal
    .transition(Start, PropA, Prop)
    .transition(Start, PropB, Prop)
    .transition(Start, Necessity, Modal)
    .transition(Start, Possibility, Modal)
    .transition(Start, Negation, Negated)
    // negation prefixes an atom or a modal expression; double negation sinks
    .transition(Negated, PropA, Prop)
    .transition(Negated, PropB, Prop)
    .transition(Negated, Necessity, Modal)
    .transition(Negated, Possibility, Modal)
    // a modal operator binds exactly one atom
    .transition(Modal, PropA, Prop)
    .transition(Modal, PropB, Prop)
    // binary connectives chain to the right
    .transition(Prop, Conjunction, Start)
    .transition(Prop, Disjunction, Start)
    .transition(Prop, Implication, Start)
    .build()
}
