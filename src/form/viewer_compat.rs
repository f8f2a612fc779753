//! Viewer compatibility adjustments
//!
//! After load the form asks viewers to regenerate field appearances. Before
//! save every cached appearance is dropped and text fields are locked, so the
//! viewer draws the new values and the reader cannot edit them.

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::form::node::FormNode;
use crate::pdf_document::PdfForm;
use crate::types::{FieldFlags, FieldKey, FormKey};

/// Sets `/NeedAppearances`, drops `/XFA` and clears every field's `/AS`.
///
/// Fails with [`Error::ConfigError`] and leaves the document untouched when
/// there is no AcroForm.
pub fn prepare_after_load(form: &mut PdfForm) -> Result<()> {
    let Some(acro_form) = form.acro_form_mut() else {
        warn!("Document has no AcroForm");
        return Err(Error::ConfigError("AcroForm not found".into()));
    };

    // Removing XFA has no observed effect on viewers; NeedAppearances does.
    acro_form.remove_entry(FormKey::Xfa);
    acro_form.set_bool(FormKey::NeedAppearances, true);

    form.for_each_field_mut(|field| {
        field.remove_entry(FieldKey::AppearanceState);
    });

    debug!("AcroForm prepared for appearance regeneration");
    Ok(())
}

/// Drops every field's `/AP` and locks text fields.
pub fn prepare_before_save(form: &mut PdfForm) {
    let mut locked = 0usize;
    form.for_each_field_mut(|field| {
        field.remove_entry(FieldKey::Appearance);
        if lock_field(field) {
            locked += 1;
        }
    });
    debug!("Locked {} text fields before save", locked);
}

/// Sets a text field's flags to exactly read-only. Other field types are
/// left alone. Returns whether the field was locked.
pub fn lock_field<N: FormNode>(field: &mut N) -> bool {
    if !field.kind().is_some_and(|kind| kind.is_text()) {
        return false;
    }
    field.set_flags(FieldFlags::READ_ONLY);
    true
}
