//! Navigation from the document catalog to the AcroForm and its fields

use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::types::{FormKey, PdfKey};

/// Position of a field dictionary inside the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldHandle {
    /// Field stored as an indirect object.
    Indirect(ObjectId),
    /// Field stored directly in the `/Fields` array at this index.
    Inline(usize),
}

const ACRO_FORM: &[u8] = b"AcroForm";

fn catalog_id(doc: &Document) -> Option<ObjectId> {
    doc.trailer
        .get(b"Root")
        .and_then(Object::as_reference)
        .ok()
}

fn resolve_dict<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Dictionary> {
    match obj {
        Object::Reference(id) => doc.get_dictionary(*id).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

/// The `/AcroForm` dictionary, if the catalog has one.
pub fn acro_form(doc: &Document) -> Option<&Dictionary> {
    let catalog = doc.get_dictionary(catalog_id(doc)?).ok()?;
    resolve_dict(doc, catalog.get(ACRO_FORM).ok()?)
}

pub fn acro_form_mut(doc: &mut Document) -> Option<&mut Dictionary> {
    let catalog_id = catalog_id(doc)?;
    let indirect = match doc.get_dictionary(catalog_id).ok()?.get(ACRO_FORM).ok()? {
        Object::Reference(id) => Some(*id),
        Object::Dictionary(_) => None,
        _ => return None,
    };

    match indirect {
        Some(id) => doc.get_object_mut(id).and_then(Object::as_dict_mut).ok(),
        None => doc
            .get_object_mut(catalog_id)
            .and_then(Object::as_dict_mut)
            .and_then(|catalog| catalog.get_mut(ACRO_FORM))
            .and_then(Object::as_dict_mut)
            .ok(),
    }
}

fn fields_array(doc: &Document) -> Option<&Vec<Object>> {
    match acro_form(doc)?.get(FormKey::Fields.as_bytes()).ok()? {
        Object::Reference(id) => doc.get_object(*id).and_then(Object::as_array).ok(),
        Object::Array(fields) => Some(fields),
        _ => None,
    }
}

fn fields_array_mut(doc: &mut Document) -> Option<&mut Vec<Object>> {
    let indirect = match acro_form(doc)?.get(FormKey::Fields.as_bytes()).ok()? {
        Object::Reference(id) => Some(*id),
        Object::Array(_) => None,
        _ => return None,
    };

    match indirect {
        Some(id) => doc.get_object_mut(id).and_then(Object::as_array_mut).ok(),
        None => acro_form_mut(doc)?
            .get_mut(FormKey::Fields.as_bytes())
            .and_then(Object::as_array_mut)
            .ok(),
    }
}

/// Every field dictionary listed in `/Fields`, in document order.
///
/// Missing form or missing `/Fields` yields an empty list. Entries that do
/// not resolve to a dictionary are skipped.
pub fn field_handles(doc: &Document) -> Vec<FieldHandle> {
    let Some(fields) = fields_array(doc) else {
        return Vec::new();
    };

    fields
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match entry {
            Object::Reference(id) if doc.get_dictionary(*id).is_ok() => {
                Some(FieldHandle::Indirect(*id))
            }
            Object::Dictionary(_) => Some(FieldHandle::Inline(index)),
            _ => None,
        })
        .collect()
}

pub fn field(doc: &Document, handle: FieldHandle) -> Option<&Dictionary> {
    match handle {
        FieldHandle::Indirect(id) => doc.get_dictionary(id).ok(),
        FieldHandle::Inline(index) => fields_array(doc)?.get(index)?.as_dict().ok(),
    }
}

pub fn field_mut(doc: &mut Document, handle: FieldHandle) -> Option<&mut Dictionary> {
    match handle {
        FieldHandle::Indirect(id) => doc.get_object_mut(id).and_then(Object::as_dict_mut).ok(),
        FieldHandle::Inline(index) => fields_array_mut(doc)?.get_mut(index)?.as_dict_mut().ok(),
    }
}
