use std::fmt::Debug;

use hashbrown::{HashMap, HashSet};
use itertools::Itertools;
use petgraph::{graph::DiGraph, visit::Bfs};
use thiserror::Error;

use crate::{
    automaton::{AutomatonState, AutomatonSymbol, Verdict},
    logger::Logger,
};

/// Errors caught while building a grammar configuration.
/// These are construction-time defects of the grammar itself, never runtime
/// conditions of a validation scan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("transition reads '{symbol}', which is not in the alphabet")]
    SymbolOutsideAlphabet { symbol: char },
    #[error("conflicting transitions from {from} on '{symbol}'")]
    TransitionConflict { from: String, symbol: char },
    #[error("transition out of the sink state on '{symbol}'")]
    SinkEscape { symbol: char },
    #[error("the sink state must not be accepting")]
    AcceptingSink,
    #[error("the accepting set is empty")]
    NoAcceptingState,
    #[error("'{symbol}' is in the alphabet but never read on a transition reachable from the initial state")]
    UnreadSymbol { symbol: char },
}

/// A deterministic finite automaton over single-character symbols.
///
/// The transition table is sparse: any `(state, symbol)` pair without an
/// entry transitions to the sink state. [DfaBuilder] refuses transitions
/// that leave the sink, so the sink is absorbing for the whole alphabet.
///
/// A `Dfa` is immutable once built and holds no per-run state, so a shared
/// reference can validate any number of inputs, concurrently included.
#[derive(Clone)]
pub struct Dfa<S: AutomatonState, A: AutomatonSymbol> {
    alphabet: Vec<A>,
    initial: S,
    sink: S,
    accepting: HashSet<S>,
    transitions: HashMap<(S, A), S>,
}

impl<S: AutomatonState, A: AutomatonSymbol> Dfa<S, A> {
    pub fn builder(alphabet: Vec<A>, initial: S, sink: S) -> DfaBuilder<S, A> {
        DfaBuilder::new(alphabet, initial, sink)
    }

    pub fn alphabet(&self) -> &[A] {
        &self.alphabet
    }

    pub fn initial(&self) -> S {
        self.initial
    }

    pub fn sink(&self) -> S {
        self.sink
    }

    pub fn is_accepting(&self, state: S) -> bool {
        self.accepting.contains(&state)
    }

    pub fn in_alphabet(&self, symbol: A) -> bool {
        self.alphabet.contains(&symbol)
    }

    /// The total transition function: table lookup with fallback to sink.
    pub fn successor(&self, state: S, symbol: A) -> S {
        *self.transitions.get(&(state, symbol)).unwrap_or(&self.sink)
    }

    /// Runs a single left-to-right scan over `input` and classifies the
    /// final state.
    ///
    /// A character that is not in the alphabet aborts the scan immediately;
    /// the remaining characters are never examined. A grammatically
    /// ill-formed string is not an error, it rejects through the sink.
    ///
    /// When a logger is passed, each consumed symbol logs one debug line
    /// with the transition it caused. The trace has no effect on the
    /// verdict.
    pub fn validate(&self, input: &str, logger: Option<&Logger>) -> Verdict {
        let mut current = self.initial;

        for c in input.chars() {
            let symbol = match A::from_glyph(c) {
                Some(s) if self.in_alphabet(s) => s,
                _ => return Verdict::OutsideAlphabet(c),
            };

            let next = self.successor(current, symbol);

            if let Some(logger) = logger {
                logger.debug(&format!(
                    "{:?} --'{}'--> {:?}",
                    current,
                    symbol.glyph(),
                    next
                ));
            }

            current = next;
        }

        if self.accepting.contains(&current) {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    }

    pub fn accepts(&self, input: &str) -> bool {
        self.validate(input, None).is_accepted()
    }
}

impl<S: AutomatonState, A: AutomatonSymbol> Debug for Dfa<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dfa")
            .field(
                "alphabet",
                &self.alphabet.iter().map(|s| s.glyph()).collect_vec(),
            )
            .field("initial", &self.initial)
            .field("sink", &self.sink)
            .field("accepting", &self.accepting.iter().collect_vec())
            .field(
                "transitions",
                &self
                    .transitions
                    .iter()
                    .map(|((from, symbol), to)| {
                        format!("{:?} --'{}'--> {:?}", from, symbol.glyph(), to)
                    })
                    .sorted()
                    .collect_vec(),
            )
            .finish()
    }
}

/// Builder for [Dfa]. Collects the accepting set and transition rows, then
/// checks the configuration as a whole in [DfaBuilder::build].
pub struct DfaBuilder<S: AutomatonState, A: AutomatonSymbol> {
    alphabet: Vec<A>,
    initial: S,
    sink: S,
    accepting: Vec<S>,
    transitions: Vec<(S, A, S)>,
}

impl<S: AutomatonState, A: AutomatonSymbol> DfaBuilder<S, A> {
    pub fn new(alphabet: Vec<A>, initial: S, sink: S) -> Self {
        DfaBuilder {
            alphabet,
            initial,
            sink,
            accepting: vec![],
            transitions: vec![],
        }
    }

    pub fn accepting(mut self, state: S) -> Self {
        self.accepting.push(state);
        self
    }

    pub fn transition(mut self, from: S, symbol: A, to: S) -> Self {
        self.transitions.push((from, symbol, to));
        self
    }

    pub fn build(self) -> Result<Dfa<S, A>, GrammarError> {
        if self.accepting.is_empty() {
            return Err(GrammarError::NoAcceptingState);
        }

        if self.accepting.contains(&self.sink) {
            return Err(GrammarError::AcceptingSink);
        }

        let mut table = HashMap::new();

        for &(from, symbol, to) in &self.transitions {
            if !self.alphabet.contains(&symbol) {
                return Err(GrammarError::SymbolOutsideAlphabet {
                    symbol: symbol.glyph(),
                });
            }

            if from == self.sink && to != self.sink {
                return Err(GrammarError::SinkEscape {
                    symbol: symbol.glyph(),
                });
            }

            if let Some(previous) = table.insert((from, symbol), to) {
                if previous != to {
                    return Err(GrammarError::TransitionConflict {
                        from: format!("{:?}", from),
                        symbol: symbol.glyph(),
                    });
                }
            }
        }

        self.check_symbol_coverage(&table)?;

        Ok(Dfa {
            alphabet: self.alphabet,
            initial: self.initial,
            sink: self.sink,
            accepting: self.accepting.into_iter().collect(),
            transitions: table,
        })
    }

    /// Every alphabet symbol must be read by at least one transition whose
    /// source state is reachable from the initial state. A symbol failing
    /// this is dead weight in the alphabet and almost always a typo in the
    /// table.
    fn check_symbol_coverage(&self, table: &HashMap<(S, A), S>) -> Result<(), GrammarError> {
        let mut graph = DiGraph::<S, A>::new();
        let mut nodes = HashMap::new();

        let start = *nodes
            .entry(self.initial)
            .or_insert_with(|| graph.add_node(self.initial));

        for (&(from, symbol), &to) in table {
            let from_node = *nodes.entry(from).or_insert_with(|| graph.add_node(from));
            let to_node = *nodes.entry(to).or_insert_with(|| graph.add_node(to));
            graph.add_edge(from_node, to_node, symbol);
        }

        let mut reachable = HashSet::new();
        let mut bfs = Bfs::new(&graph, start);
        while let Some(node) = bfs.next(&graph) {
            reachable.insert(node);
        }

        let read = table
            .keys()
            .filter(|(from, _)| reachable.contains(&nodes[from]))
            .map(|&(_, symbol)| symbol)
            .collect::<HashSet<_>>();

        for &symbol in &self.alphabet {
            if !read.contains(&symbol) {
                return Err(GrammarError::UnreadSymbol {
                    symbol: symbol.glyph(),
                });
            }
        }

        Ok(())
    }
}
