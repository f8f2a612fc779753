//! AcroForm field access and mutation
//!
//! Locating, filling, locking and listing fields of a [`PdfForm`], plus the
//! viewer-compatibility adjustments applied after load and before save.
//!
//! [`PdfForm`]: crate::pdf_document::PdfForm

pub mod acroform;
pub mod enumerator;
pub mod locator;
pub mod node;
pub mod viewer_compat;
pub mod writer;

pub use acroform::FieldHandle;
pub use enumerator::{list_fields, log_field_names};
pub use locator::find_field;
pub use node::FormNode;
pub use viewer_compat::{lock_field, prepare_after_load, prepare_before_save};
pub use writer::{fill_in_field, fill_text_field};

#[cfg(test)]
pub(crate) mod test_support;
