//! Structured JSON event log
//!
//! - One log line = one event
//! - Deterministic key ordering (event, then severity, then fields
//!   alphabetically)
//! - Synchronous, unbuffered writes
//! - The sink is injected at construction, so embedders direct the
//!   stream and tests capture it

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Diagnostic detail
    Debug = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues
    Warn = 2,
    /// Operation failures
    Error = 3,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structured event log over an injected sink
///
/// A disabled log formats nothing and writes nothing.
pub struct EventLog {
    sink: Option<Box<dyn Write>>,
}

impl EventLog {
    /// Log to standard output
    pub fn stdout() -> Self {
        Self {
            sink: Some(Box::new(io::stdout())),
        }
    }

    /// Log to an arbitrary writer
    pub fn to_writer(writer: impl Write + 'static) -> Self {
        Self {
            sink: Some(Box::new(writer)),
        }
    }

    /// Discard all events
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    /// Emit one event line with the given severity and fields
    pub fn log(&mut self, severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };

        let line = format_event(severity, event, fields);
        // One write, one flush per event
        let _ = sink.write_all(line.as_bytes());
        let _ = sink.flush();
    }

    /// Log at DEBUG level
    pub fn debug(&mut self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Debug, event, fields);
    }

    /// Log at INFO level
    pub fn info(&mut self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Info, event, fields);
    }

    /// Log at WARN level
    pub fn warn(&mut self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Warn, event, fields);
    }

    /// Log at ERROR level
    pub fn error(&mut self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Error, event, fields);
    }
}

/// Renders one event as a JSON line with deterministic key order:
/// `event` first, `severity` second, remaining fields alphabetically.
fn format_event(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut line = String::with_capacity(128);

    line.push_str("{\"event\":\"");
    escape_into(&mut line, event);
    line.push_str("\",\"severity\":\"");
    line.push_str(severity.as_str());
    line.push('"');

    let mut sorted: Vec<&(&str, &str)> = fields.iter().collect();
    sorted.sort_by_key(|(key, _)| *key);

    for (key, value) in sorted {
        line.push_str(",\"");
        escape_into(&mut line, key);
        line.push_str("\":\"");
        escape_into(&mut line, value);
        line.push('"');
    }

    line.push_str("}\n");
    line
}

fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
}
