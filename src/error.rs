//! Error types and handling for the form filling library
//! Created: 2026-10-16

use std::{error::Error as StdError, io, result::Result as StdResult};

use thiserror::Error;

/// Custom result type for form operations
pub type Result<T> = StdResult<T, Error>;

/// Core error type for form operations
#[derive(Error, Debug)]
#[non_exhaustive]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    /// The document is structurally unusable for form filling (no AcroForm).
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("PDF error: {0}")]
    PdfError(#[from] lopdf::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl Error {
    /// Renders the error followed by every source in its chain, one per line.
    pub fn diagnostic_trace(&self) -> String {
        let mut trace = format!("Error: {}", self);
        let mut source = self.source();
        while let Some(cause) = source {
            trace.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        trace
    }
}
