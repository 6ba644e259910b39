use modal_syntax::{
    automaton::{
        dfa::{Dfa, GrammarError},
        AutomatonSymbol, Verdict,
    },
    logger::{LogLevel, Logger},
};

// (ab)+ over {a, b}, with 9 as the sink
fn ab_plus() -> Dfa<u32, char> {
    Dfa::builder(vec!['a', 'b'], 0, 9)
        .accepting(2)
        .transition(0, 'a', 1)
        .transition(1, 'b', 2)
        .transition(2, 'a', 1)
        .build()
        .unwrap()
}

#[test]
fn test_accepts() {
    let dfa = ab_plus();

    assert!(dfa.accepts("ab"));
    assert!(dfa.accepts("abab"));
    assert!(!dfa.accepts("a"));
    assert!(!dfa.accepts("aba"));
    assert!(!dfa.accepts("ba"));
}

#[test]
fn test_missing_entries_go_to_sink() {
    let dfa = ab_plus();

    // (0, 'b') is not in the table
    assert_eq!(dfa.successor(0, 'b'), dfa.sink());
    assert_eq!(dfa.validate("b", None), Verdict::Rejected);
}

#[test]
fn test_sink_absorption() {
    let dfa = ab_plus();

    for &symbol in dfa.alphabet() {
        assert_eq!(dfa.successor(dfa.sink(), symbol), dfa.sink());
    }

    // once in the sink, no suffix can rescue the run
    assert!(!dfa.accepts("bbab"));
    assert!(!dfa.accepts("bbababababab"));
}

#[test]
fn test_out_of_alphabet_short_circuits() {
    let dfa = ab_plus();

    assert_eq!(dfa.validate("abc", None), Verdict::OutsideAlphabet('c'));
    // the first offending character is reported, later ones are not reached
    assert_eq!(dfa.validate("xyab", None), Verdict::OutsideAlphabet('x'));
    // even a run already in the sink reports the input error
    assert_eq!(dfa.validate("bbz", None), Verdict::OutsideAlphabet('z'));

    let verdict = dfa.validate("abc", None);
    assert!(verdict.is_input_error());
    assert_eq!(verdict.to_string(), "symbol 'c' is not in the alphabet");
}

#[test]
fn test_determinism() {
    let dfa = ab_plus();

    for input in ["", "ab", "aba", "bb", "ab?"] {
        assert_eq!(dfa.validate(input, None), dfa.validate(input, None));
    }
}

#[test]
fn test_trace_does_not_affect_the_verdict() {
    let dfa = ab_plus();
    // Error level keeps the debug trace off stderr during the test run
    let logger = Logger::new(LogLevel::Error, "trace");

    // accepted, rejected, sunk and out-of-alphabet inputs classify
    // identically with and without a trace logger attached
    for input in ["", "ab", "abab", "aba", "bb", "abc", "x", "bbz"] {
        assert_eq!(
            dfa.validate(input, Some(&logger)),
            dfa.validate(input, None)
        );
    }
}

#[test]
fn test_empty_input_classifies_by_initial_state() {
    let dfa = ab_plus();
    assert_eq!(dfa.validate("", None), Verdict::Rejected);

    let dfa = Dfa::builder(vec!['a'], 0u32, 9)
        .accepting(0)
        .transition(0, 'a', 0)
        .build()
        .unwrap();
    assert_eq!(dfa.validate("", None), Verdict::Accepted);
}

#[test]
fn test_verdict_parts() {
    let dfa = ab_plus();

    assert_eq!(
        dfa.validate("ab", None).into_parts(),
        (true, "accepted".to_string())
    );
    assert_eq!(
        dfa.validate("a", None).into_parts(),
        (false, "rejected".to_string())
    );
    assert_eq!(
        dfa.validate("?", None).into_parts(),
        (false, "symbol '?' is not in the alphabet".to_string())
    );
}

#[test]
fn test_build_rejects_empty_accepting_set() {
    let result = Dfa::builder(vec!['a'], 0u32, 9)
        .transition(0, 'a', 0)
        .build();

    assert_eq!(result.unwrap_err(), GrammarError::NoAcceptingState);
}

#[test]
fn test_build_rejects_accepting_sink() {
    let result = Dfa::builder(vec!['a'], 0u32, 9)
        .accepting(9)
        .transition(0, 'a', 0)
        .build();

    assert_eq!(result.unwrap_err(), GrammarError::AcceptingSink);
}

#[test]
fn test_build_rejects_sink_escape() {
    let result = Dfa::builder(vec!['a'], 0u32, 9)
        .accepting(0)
        .transition(0, 'a', 0)
        .transition(9, 'a', 0)
        .build();

    assert_eq!(result.unwrap_err(), GrammarError::SinkEscape { symbol: 'a' });
}

#[test]
fn test_build_allows_explicit_sink_self_loop() {
    let result = Dfa::builder(vec!['a'], 0u32, 9)
        .accepting(0)
        .transition(0, 'a', 0)
        .transition(9, 'a', 9)
        .build();

    assert!(result.is_ok());
}

#[test]
fn test_build_rejects_transition_conflict() {
    let result = Dfa::builder(vec!['a', 'b'], 0u32, 9)
        .accepting(1)
        .transition(0, 'a', 1)
        .transition(0, 'a', 0)
        .transition(0, 'b', 1)
        .transition(1, 'b', 1)
        .build();

    assert_eq!(
        result.unwrap_err(),
        GrammarError::TransitionConflict {
            from: "0".to_string(),
            symbol: 'a'
        }
    );
}

#[test]
fn test_build_rejects_symbol_outside_alphabet() {
    let result = Dfa::builder(vec!['a'], 0u32, 9)
        .accepting(0)
        .transition(0, 'a', 0)
        .transition(0, 'b', 0)
        .build();

    assert_eq!(
        result.unwrap_err(),
        GrammarError::SymbolOutsideAlphabet { symbol: 'b' }
    );
}

#[test]
fn test_build_rejects_unread_alphabet_symbol() {
    // 'b' is declared but never read anywhere
    let result = Dfa::builder(vec!['a', 'b'], 0u32, 9)
        .accepting(0)
        .transition(0, 'a', 0)
        .build();

    assert_eq!(result.unwrap_err(), GrammarError::UnreadSymbol { symbol: 'b' });
}

#[test]
fn test_build_rejects_symbol_read_only_from_unreachable_state() {
    // 'b' is read, but only from state 5, which nothing reaches
    let result = Dfa::builder(vec!['a', 'b'], 0u32, 9)
        .accepting(0)
        .transition(0, 'a', 0)
        .transition(5, 'b', 0)
        .build();

    assert_eq!(result.unwrap_err(), GrammarError::UnreadSymbol { symbol: 'b' });
}

#[test]
fn test_char_symbols_decode_to_themselves() {
    assert_eq!(char::from_glyph('x'), Some('x'));
    assert_eq!('x'.glyph(), 'x');
}
