//! Utility Module Implementation
//!
//! Aggregates internal helpers: diagnostic sinks, file IO and placeholder
//! text generation.

pub mod io;
pub mod logging;
pub mod lorem;

pub use self::{
    io::{now_millis, read_file, timestamped_output_path, write_file},
    logging::{ConsoleSink, DiagnosticSink, LogEntry, LogLevel, Logger},
    lorem::lorem_paragraphs,
};
