//! Writing text values into fields

use crate::form::locator::find_field;
use crate::form::node::FormNode;
use crate::pdf_document::PdfForm;
use crate::types::{FieldFlags, FieldKey};
use crate::utils::DiagnosticSink;

/// Stores `text` as the field's value and sets its flags to exactly
/// do-not-scroll | multiline. The field type is not checked.
pub fn fill_text_field<N: FormNode>(field: &mut N, text: &str) {
    field.set_text(FieldKey::Value, text);
    field.set_flags(FieldFlags::FILLED_TEXT);
}

/// Locates `field_name` and fills it with `text`.
///
/// A missing field is reported through `sink` and is not an error; the return
/// value says whether the field was written.
pub fn fill_in_field(
    form: &mut PdfForm,
    field_name: &str,
    text: &str,
    sink: &dyn DiagnosticSink,
) -> bool {
    let handle = find_field(form, field_name);
    let Some(field) = handle.and_then(move |handle| form.field_mut(handle)) else {
        sink.error(&format!("Field {} not found", field_name));
        return false;
    };

    sink.info(&format!(
        "Field {} found.  Writing value of {}",
        field_name, text
    ));
    fill_text_field(field, text);
    true
}
