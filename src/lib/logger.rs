use std::{fmt::Display, str::FromStr};

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn tag(&self) -> ColoredString {
        match self {
            LogLevel::Debug => "DBG".bright_cyan(),
            LogLevel::Info => "INF".bright_green(),
            LogLevel::Warn => "WAR".yellow(),
            LogLevel::Error => "ERR".bright_red(),
        }
    }

    /// Whether a message at level `other` is shown when the logger is set
    /// to `self`.
    pub fn shows(&self, other: &LogLevel) -> bool {
        match self {
            LogLevel::Debug => true,
            LogLevel::Info => *other != LogLevel::Debug,
            LogLevel::Warn => *other == LogLevel::Warn || *other == LogLevel::Error,
            LogLevel::Error => *other == LogLevel::Error,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" | "dbg" => Ok(LogLevel::Debug),
            "info" | "inf" => Ok(LogLevel::Info),
            "warn" | "warning" | "war" => Ok(LogLevel::Warn),
            "error" | "err" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "Debug"),
            LogLevel::Info => write!(f, "Info"),
            LogLevel::Warn => write!(f, "Warn"),
            LogLevel::Error => write!(f, "Error"),
        }
    }
}

/// A small leveled logger writing to stderr. Carries the per-symbol
/// transition trace of the automaton engine when one is passed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logger {
    level: LogLevel,
    name: String,
}

impl Logger {
    pub fn new(level: LogLevel, name: impl Into<String>) -> Self {
        Logger {
            level,
            name: name.into(),
        }
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        if self.level.shows(&level) {
            let name = format!("{}:", self.name).dimmed();
            eprintln!("[{}] {} {}", level.tag(), name, message);
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    pub fn empty(&self, level: LogLevel) {
        if self.level.shows(&level) {
            eprintln!();
        }
    }

    pub fn object<'a>(&'a self, name: &'a str) -> ObjectBuilder<'a> {
        ObjectBuilder::new(name, self)
    }
}

/// Builds a multi-field log record, logged as one block.
#[derive(Debug, Clone)]
pub struct ObjectBuilder<'a> {
    logger: &'a Logger,
    name: &'a str,
    fields: Vec<(&'a str, String)>,
}

impl<'a> ObjectBuilder<'a> {
    fn new(name: &'a str, logger: &'a Logger) -> Self {
        ObjectBuilder {
            logger,
            name,
            fields: vec![],
        }
    }

    pub fn add_field(mut self, name: &'a str, value: impl Into<String>) -> Self {
        self.fields.push((name, value.into()));

        self
    }

    pub fn log(&self, level: LogLevel) {
        let mut record = format!("{} {{", self.name);
        for (name, value) in &self.fields {
            record.push_str(&format!("\n  {}: {}", name, value));
        }
        record.push_str("\n}");

        self.logger.log(level, &record);
    }
}
