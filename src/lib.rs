//! Main Library File for AcroForm filling
//! Loads a PDF, writes text values into named form fields, applies viewer
//! compatibility adjustments and saves the result.

// Configuration and Core Pipeline
pub mod config;
pub mod error;
pub mod pdf_document;
pub mod pipeline;
pub mod types;

// Field access, filling, locking and listing
pub mod form;

// Shared Utilities
pub mod utils;

// Re-exports for crate consumers
pub use config::{FieldAssignment, FillConfig};
pub use error::{Error, Result};
pub use form::{
    fill_in_field, fill_text_field, find_field, list_fields, lock_field, log_field_names,
    prepare_after_load, prepare_before_save, FieldHandle, FormNode,
};
pub use pdf_document::PdfForm;
pub use pipeline::{list_form_fields, FillReport, Pipeline};
pub use types::{FieldFlags, FieldKey, FieldKind, FieldSummary, FormKey};
pub use utils::{ConsoleSink, DiagnosticSink, Logger};
