pub mod automaton;
pub mod grammar;
pub mod logger;
