//! Field lookup by name

use tracing::debug;

use crate::form::acroform::FieldHandle;
use crate::form::node::FormNode;
use crate::pdf_document::PdfForm;
use crate::types::FieldKey;

/// First field whose `/T` text equals `name` exactly, in document order.
pub fn find_field(form: &PdfForm, name: &str) -> Option<FieldHandle> {
    let found = form.field_handles().into_iter().find(|&handle| {
        form.field(handle)
            .and_then(|field| field.text(FieldKey::Name))
            .is_some_and(|field_name| field_name == name)
    });
    debug!("find_field({:?}) -> {:?}", name, found);
    found
}
