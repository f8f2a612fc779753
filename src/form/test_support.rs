//! In-memory form documents for unit tests

use lopdf::{dictionary, Dictionary, Document, Object};

/// Text field dictionary with a name, type `/Tx` and a cached appearance.
pub fn text_field(name: &str) -> Dictionary {
    dictionary! {
        "T" => Object::string_literal(name),
        "FT" => "Tx",
        "Ff" => Object::Integer(1 << 1),
        "AP" => dictionary! { "N" => Object::Null },
        "AS" => "Off",
    }
}

/// Document whose AcroForm (an indirect object) lists `fields` as indirect
/// references, in order.
pub fn document_with_fields(fields: Vec<Dictionary>) -> Document {
    let mut doc = Document::with_version("1.7");
    let refs: Vec<Object> = fields
        .into_iter()
        .map(|field| Object::Reference(doc.add_object(field)))
        .collect();

    let form_id = doc.add_object(dictionary! {
        "Fields" => refs,
        "XFA" => Object::Null,
    });
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "AcroForm" => Object::Reference(form_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc
}

/// Document with a catalog but no AcroForm.
pub fn document_without_form() -> Document {
    let mut doc = Document::with_version("1.7");
    let catalog_id = doc.add_object(dictionary! { "Type" => "Catalog" });
    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc
}
