#![allow(dead_code)]

use lopdf::{dictionary, Dictionary, Document, Object};
use std::path::{Path, PathBuf};

pub struct TestFixtures;

impl TestFixtures {
    /// Text field with a stale appearance, a selection marker and
    /// pre-existing flags.
    pub fn text_field(name: &str) -> Dictionary {
        dictionary! {
            "T" => Object::string_literal(name),
            "FT" => "Tx",
            "Ff" => Object::Integer(1 << 1),
            "AP" => dictionary! { "N" => Object::Null },
            "AS" => "Off",
        }
    }

    pub fn unnamed_text_field() -> Dictionary {
        dictionary! { "FT" => "Tx" }
    }

    /// One-page PDF whose AcroForm lists `fields` in order.
    pub fn form_pdf(fields: Vec<Dictionary>) -> Vec<u8> {
        let mut doc = Self::page_document();
        let refs: Vec<Object> = fields
            .into_iter()
            .map(|field| Object::Reference(doc.add_object(field)))
            .collect();
        let form_id = doc.add_object(dictionary! {
            "Fields" => refs,
            "XFA" => Object::Null,
        });

        let root = doc.trailer.get(b"Root").unwrap().as_reference().unwrap();
        doc.get_object_mut(root)
            .unwrap()
            .as_dict_mut()
            .unwrap()
            .set("AcroForm", Object::Reference(form_id));

        Self::to_bytes(doc)
    }

    /// One-page PDF without an AcroForm.
    pub fn plain_pdf() -> Vec<u8> {
        Self::to_bytes(Self::page_document())
    }

    pub fn get_malformed_pdf() -> Vec<u8> {
        b"This is not a valid PDF file".to_vec()
    }

    pub fn write(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    fn page_document() -> Document {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ],
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![Object::Reference(page_id)],
                "Count" => Object::Integer(1),
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(pages_id),
        });
        doc.trailer.set("Root", Object::Reference(catalog_id));
        doc
    }

    fn to_bytes(mut doc: Document) -> Vec<u8> {
        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }
}

/// Field dictionary named `name` inside a saved PDF.
pub fn field_in(bytes: &[u8], name: &str) -> Option<Dictionary> {
    let doc = Document::load_mem(bytes).unwrap();
    let root = doc.trailer.get(b"Root").ok()?.as_reference().ok()?;
    let form_id = doc
        .get_dictionary(root)
        .ok()?
        .get(b"AcroForm")
        .ok()?
        .as_reference()
        .ok()?;
    let fields = doc
        .get_dictionary(form_id)
        .ok()?
        .get(b"Fields")
        .ok()?
        .as_array()
        .ok()?
        .clone();

    fields.iter().find_map(|entry| {
        let dict = doc.get_dictionary(entry.as_reference().ok()?).ok()?;
        match dict.get(b"T") {
            Ok(Object::String(bytes, _)) if bytes.as_slice() == name.as_bytes() => {
                Some(dict.clone())
            }
            _ => None,
        }
    })
}

/// The AcroForm dictionary of a saved PDF.
pub fn acro_form_in(bytes: &[u8]) -> Dictionary {
    let doc = Document::load_mem(bytes).unwrap();
    let root = doc.trailer.get(b"Root").unwrap().as_reference().unwrap();
    let form_id = doc
        .get_dictionary(root)
        .unwrap()
        .get(b"AcroForm")
        .unwrap()
        .as_reference()
        .unwrap();
    doc.get_dictionary(form_id).unwrap().clone()
}
