//! Field record vocabulary: dictionary keys, flag bits and field kinds
//! Created: 2026-10-16

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dictionary key the form code is allowed to read or write.
pub trait PdfKey: Copy {
    fn as_bytes(self) -> &'static [u8];
}

/// Keys of a single field dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    /// `/T`, the partial field name
    Name,
    /// `/FT`, the field type
    Type,
    /// `/V`, the current value
    Value,
    /// `/Ff`, the field flags
    Flags,
    /// `/AP`, the cached appearance streams
    Appearance,
    /// `/AS`, the selected appearance state
    AppearanceState,
}

impl PdfKey for FieldKey {
    fn as_bytes(self) -> &'static [u8] {
        match self {
            FieldKey::Name => b"T",
            FieldKey::Type => b"FT",
            FieldKey::Value => b"V",
            FieldKey::Flags => b"Ff",
            FieldKey::Appearance => b"AP",
            FieldKey::AppearanceState => b"AS",
        }
    }
}

/// Keys of the interactive form (`/AcroForm`) dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKey {
    Fields,
    NeedAppearances,
    Xfa,
}

impl PdfKey for FormKey {
    fn as_bytes(self) -> &'static [u8] {
        match self {
            FormKey::Fields => b"Fields",
            FormKey::NeedAppearances => b"NeedAppearances",
            FormKey::Xfa => b"XFA",
        }
    }
}

bitflags! {
    /// Field flags (`/Ff`) used by the filler.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FieldFlags: u32 {
        /// Bit 1: the user may not change the value
        const READ_ONLY = 1 << 0;
        /// Bit 13: text may span multiple lines
        const MULTILINE = 1 << 12;
        /// Bit 24: text does not scroll past the field box
        const DO_NOT_SCROLL = 1 << 23;
    }
}

impl FieldFlags {
    /// Flags written alongside a freshly filled text value.
    pub const FILLED_TEXT: FieldFlags = FieldFlags::DO_NOT_SCROLL.union(FieldFlags::MULTILINE);
}

/// Field type as declared by `/FT`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Button,
    Choice,
    Signature,
    Other(String),
}

impl FieldKind {
    pub fn from_name(name: &[u8]) -> Self {
        match name {
            b"Tx" => FieldKind::Text,
            b"Btn" => FieldKind::Button,
            b"Ch" => FieldKind::Choice,
            b"Sig" => FieldKind::Signature,
            other => FieldKind::Other(String::from_utf8_lossy(other).into_owned()),
        }
    }

    /// The PDF name this kind was read from, without the leading slash.
    pub fn as_pdf_name(&self) -> &str {
        match self {
            FieldKind::Text => "Tx",
            FieldKind::Button => "Btn",
            FieldKind::Choice => "Ch",
            FieldKind::Signature => "Sig",
            FieldKind::Other(name) => name,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, FieldKind::Text)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_pdf_name())
    }
}

/// Name and type of one field, as reported by the enumerator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSummary {
    pub name: String,
    pub kind: FieldKind,
}
