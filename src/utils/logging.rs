//! Diagnostic output for form operations
//!
//! Human-facing lines (field listings, fill notices, not-found warnings) go
//! through a [`DiagnosticSink`] so callers decide where they land. The binary
//! uses [`ConsoleSink`]; tests inject a [`Logger`] and inspect its entries.

use chrono::Utc;
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;
use tracing::{debug, error, info};

/// Receiver for diagnostic lines.
pub trait DiagnosticSink: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Writes info lines to stdout and error lines to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn info(&self, message: &str) {
        debug!(target: "formfill::diagnostics", "{}", message);
        let _ = writeln!(std::io::stdout().lock(), "{}", message);
    }

    fn error(&self, message: &str) {
        debug!(target: "formfill::diagnostics", "{}", message);
        let _ = writeln!(std::io::stderr().lock(), "{}", message);
    }
}

/// Severity of a recorded entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level_str = match self {
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
        };
        write!(f, "{}", level_str)
    }
}

/// Log entry structure
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: String,
}

/// Recording sink; every entry is kept in memory and forwarded to tracing.
#[derive(Debug, Default)]
pub struct Logger {
    entries: Mutex<Vec<LogEntry>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    fn record(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info => info!("{}", message),
            LogLevel::Error => error!("{}", message),
        }

        self.entries.lock().push(LogEntry {
            level,
            message: message.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        });
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// Messages recorded at `level`, oldest first.
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|entry| entry.level == level)
            .map(|entry| entry.message.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl DiagnosticSink for Logger {
    fn info(&self, message: &str) {
        self.record(LogLevel::Info, message);
    }

    fn error(&self, message: &str) {
        self.record(LogLevel::Error, message);
    }
}
