//! Typed accessors over `lopdf` dictionaries
//!
//! Form code never touches raw byte keys; it goes through [`FormNode`] with a
//! [`PdfKey`] so that field logic can be exercised against plain dictionaries.

use lopdf::{Dictionary, Object};

use crate::types::{FieldFlags, FieldKey, FieldKind, PdfKey};

/// Key/value record in the document object graph.
pub trait FormNode {
    /// Text string stored under `key`, decoded per its byte order mark
    /// (UTF-16BE, UTF-8) or as PDFDocEncoding.
    fn text<K: PdfKey>(&self, key: K) -> Option<String>;

    /// Name object stored under `key`, without the leading slash.
    fn name<K: PdfKey>(&self, key: K) -> Option<String>;

    fn boolean<K: PdfKey>(&self, key: K) -> Option<bool>;

    fn has_entry<K: PdfKey>(&self, key: K) -> bool;

    fn set_text<K: PdfKey>(&mut self, key: K, value: &str);

    fn set_bool<K: PdfKey>(&mut self, key: K, value: bool);

    /// Removes `key`, returning whether it was present.
    fn remove_entry<K: PdfKey>(&mut self, key: K) -> bool;

    /// Replaces `/Ff` with exactly `flags`.
    fn set_flags(&mut self, flags: FieldFlags);

    fn flags(&self) -> Option<FieldFlags>;

    fn kind(&self) -> Option<FieldKind> {
        self.name(FieldKey::Type)
            .map(|name| FieldKind::from_name(name.as_bytes()))
    }
}

impl FormNode for Dictionary {
    fn text<K: PdfKey>(&self, key: K) -> Option<String> {
        self.get(key.as_bytes())
            .ok()
            .and_then(|obj| lopdf::decode_text_string(obj).ok())
    }

    fn name<K: PdfKey>(&self, key: K) -> Option<String> {
        self.get(key.as_bytes())
            .and_then(Object::as_name)
            .ok()
            .map(|name| String::from_utf8_lossy(name).into_owned())
    }

    fn boolean<K: PdfKey>(&self, key: K) -> Option<bool> {
        self.get(key.as_bytes()).and_then(Object::as_bool).ok()
    }

    fn has_entry<K: PdfKey>(&self, key: K) -> bool {
        self.has(key.as_bytes())
    }

    fn set_text<K: PdfKey>(&mut self, key: K, value: &str) {
        self.set(key.as_bytes(), lopdf::text_string(value));
    }

    fn set_bool<K: PdfKey>(&mut self, key: K, value: bool) {
        self.set(key.as_bytes(), Object::Boolean(value));
    }

    fn remove_entry<K: PdfKey>(&mut self, key: K) -> bool {
        Dictionary::remove(self, key.as_bytes()).is_some()
    }

    fn set_flags(&mut self, flags: FieldFlags) {
        self.set(
            FieldKey::Flags.as_bytes(),
            Object::Integer(i64::from(flags.bits())),
        );
    }

    fn flags(&self) -> Option<FieldFlags> {
        self.get(FieldKey::Flags.as_bytes())
            .and_then(Object::as_i64)
            .ok()
            .and_then(|bits| u32::try_from(bits).ok())
            .map(FieldFlags::from_bits_retain)
    }
}
