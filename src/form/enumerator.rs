//! Field listing for diagnostics

use crate::form::node::FormNode;
use crate::pdf_document::PdfForm;
use crate::types::{FieldKey, FieldSummary};
use crate::utils::DiagnosticSink;

/// Name and type of every field that has both, in document order.
pub fn list_fields(form: &PdfForm) -> Vec<FieldSummary> {
    form.fields()
        .filter_map(|field| {
            let name = field.text(FieldKey::Name)?;
            let kind = field.kind()?;
            Some(FieldSummary { name, kind })
        })
        .collect()
}

/// Emits one `Field Name: .. Field Type: ..` line per named, typed field.
pub fn log_field_names(form: &PdfForm, sink: &dyn DiagnosticSink) {
    for summary in list_fields(form) {
        sink.info(&format!(
            "Field Name: {} Field Type: {}",
            summary.name, summary.kind
        ));
    }
}
