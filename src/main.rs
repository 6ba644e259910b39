use std::{env, process::ExitCode};

use colored::Colorize;
use itertools::Itertools;
use modal_syntax::{
    automaton::{
        dfa::{Dfa, GrammarError},
        AutomatonState, AutomatonSymbol,
    },
    grammar::{grouped, linear},
    logger::{LogLevel, Logger},
};

fn check_all<S: AutomatonState, A: AutomatonSymbol>(
    grammar: Result<Dfa<S, A>, GrammarError>,
    formulas: &[String],
    logger: &Logger,
    trace: bool,
    json: bool,
) -> ExitCode {
    let dfa = match grammar {
        Ok(dfa) => dfa,
        Err(e) => {
            logger.error(&format!("ill-formed grammar configuration: {}", e));
            return ExitCode::FAILURE;
        }
    };

    logger
        .object("Grammar")
        .add_field(
            "alphabet",
            dfa.alphabet().iter().map(|s| s.glyph()).join(" "),
        )
        .add_field("initial", format!("{:?}", dfa.initial()))
        .log(LogLevel::Info);

    let mut accepted_count = 0;

    for formula in formulas {
        let verdict = dfa.validate(formula, trace.then_some(logger));
        if trace {
            logger.empty(LogLevel::Debug);
        }

        if verdict.is_accepted() {
            accepted_count += 1;
        } else if verdict.is_input_error() {
            logger.warn(&format!("\"{}\": {}", formula, verdict));
        }

        if json {
            println!(
                "{}",
                serde_json::json!({
                    "formula": formula,
                    "accepted": verdict.is_accepted(),
                    "message": verdict.to_string(),
                })
            );
        } else {
            let (accepted, message) = verdict.into_parts();
            let message = if accepted {
                message.green()
            } else {
                message.red()
            };
            println!("\"{}\": {}", formula, message);
        }
    }

    logger.info(&format!(
        "{} of {} formulas accepted",
        accepted_count,
        formulas.len()
    ));

    if accepted_count == formulas.len() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn main() -> ExitCode {
    let mut grammar_name = None;
    let mut formulas = vec![];
    let mut trace = false;
    let mut json = false;
    let mut level = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--trace" => trace = true,
            "--json" => json = true,
            "--log-level" => {
                let value = args.next().unwrap_or_default();
                match value.parse::<LogLevel>() {
                    Ok(parsed) => level = Some(parsed),
                    Err(e) => {
                        eprintln!("{}", e);
                        return ExitCode::FAILURE;
                    }
                }
            }
            _ if grammar_name.is_none() => grammar_name = Some(arg),
            _ => formulas.push(arg),
        }
    }

    let grammar_name = grammar_name.unwrap_or_else(|| "grouped".to_string());

    if formulas.is_empty() {
        formulas = ["", "A", "□A", "□□A", "(A∧(B∨A))", "A∧", "A→B", "A∧¬□A"]
            .into_iter()
            .map(String::from)
            .collect();
    }

    // --trace implies the debug level regardless of --log-level
    let level = if trace {
        LogLevel::Debug
    } else {
        level.unwrap_or(LogLevel::Warn)
    };
    let logger = Logger::new(level, grammar_name.clone());

    match grammar_name.as_str() {
        "grouped" => check_all(grouped::grammar(), &formulas, &logger, trace, json),
        "linear" => check_all(linear::grammar(), &formulas, &logger, trace, json),
        other => {
            logger.error(&format!(
                "unknown grammar '{}', expected 'grouped' or 'linear'",
                other
            ));
            ExitCode::FAILURE
        }
    }
}
