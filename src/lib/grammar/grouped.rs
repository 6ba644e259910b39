//! The nested-parenthesis grammar: atoms, modal operators applied to atoms,
//! conjunction/disjunction joining top-level or parenthesized sub-formulas,
//! and nested grouping.
//!
//! Negation and implication are in the alphabet but not in the grammar:
//! any use of them rejects, it is not an alphabet error.
//!
//! Grouping depth is not counted: a finite automaton cannot match
//! parentheses, so unmatched `)` after a completed proposition ride along
//! on an accepted formula (`"A))"` is accepted, `")"` is not).

use crate::automaton::dfa::{Dfa, GrammarError};
use crate::grammar::ModalSymbol::{self, *};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupedState {
    /// Awaiting a new formula. Accepting: the empty formula is well-formed.
    Start,
    /// After a modal operator, a proposition must follow.
    Modal,
    /// Just completed a proposition at top level. Accepting.
    Prop,
    /// After a top-level binary connective, a proposition is pending.
    Operand,
    /// Inside a group, awaiting a proposition.
    Group,
    /// Inside a group, just after a proposition.
    GroupProp,
    Sink,
}

/// Builds the grammar configuration. The table is the whole definition;
/// everything not listed falls through to the sink, including a second
/// modal operator or an opening parenthesis right after a modal operator.
pub fn grammar() -> Result<Dfa<GroupedState, ModalSymbol>, GrammarError> {
    use GroupedState::*;

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
            OpenParen,
            CloseParen,
        ],
        Start,
        Sink,
    )
    .accepting(Start)
    .accepting(Prop)
    // start of a formula
    .transition(Start, PropA, Prop)
    .transition(Start, PropB, Prop)
    .transition(Start, Necessity, Modal)
    .transition(Start, Possibility, Modal)
    .transition(Start, OpenParen, Group)
    // inert alphabet members, routed explicitly so the coverage check holds
    .transition(Start, Negation, Sink)
    .transition(Start, Implication, Sink)
    // a modal operator binds exactly one atom
    .transition(Modal, PropA, Prop)
    .transition(Modal, PropB, Prop)
    // after a completed proposition at top level; closing parens are not
    // depth-checked and keep the proposition completed
    .transition(Prop, Conjunction, Operand)
    .transition(Prop, Disjunction, Operand)
    .transition(Prop, CloseParen, Prop)
    // a binary connective demands a right operand
    .transition(Operand, PropA, Prop)
    .transition(Operand, PropB, Prop)
    .transition(Operand, Necessity, Modal)
    .transition(Operand, Possibility, Modal)
    .transition(Operand, OpenParen, Group)
    // inside a group
    .transition(Group, PropA, GroupProp)
    .transition(Group, PropB, GroupProp)
    .transition(Group, Necessity, Modal)
    .transition(Group, Possibility, Modal)
    .transition(Group, OpenParen, Group)
    .transition(GroupProp, Conjunction, Group)
    .transition(GroupProp, Disjunction, Group)
    .transition(GroupProp, CloseParen, Prop)
    .build()
}
