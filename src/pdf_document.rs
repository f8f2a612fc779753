//! PDF Document wrapper for loading, filling and saving forms
//! Created: 2026-10-16

use std::path::Path;

use lopdf::{Dictionary, Document};
use tracing::{info, instrument};

use crate::error::Result;
use crate::form::acroform::{self, FieldHandle};
use crate::form::viewer_compat::{prepare_after_load, prepare_before_save};
use crate::utils::{read_file, write_file};

/// A parsed PDF that carries an interactive form.
#[derive(Debug, Clone)]
pub struct PdfForm {
    document: Document,
}

impl PdfForm {
    /// Load a PDF from disk and prepare its form for filling.
    #[instrument]
    pub async fn load(path: &Path) -> Result<Self> {
        let bytes = read_file(path).await?;
        let form = Self::parse(&bytes)?;
        info!(
            "Loaded {} ({} form fields)",
            path.display(),
            form.field_handles().len()
        );
        Ok(form)
    }

    /// Parse PDF bytes and prepare the form for filling.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let document = Document::load_mem(bytes)?;
        Self::from_document(document)
    }

    /// Wrap an already parsed document and prepare its form for filling.
    pub fn from_document(document: Document) -> Result<Self> {
        let mut form = Self { document };
        prepare_after_load(&mut form)?;
        Ok(form)
    }

    /// Wrap a document without any post-load adjustments.
    pub fn from_document_unprepared(document: Document) -> Self {
        Self { document }
    }

    /// Lock the form for output and serialize it.
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        prepare_before_save(self);
        let mut buffer = Vec::new();
        self.document.save_to(&mut buffer)?;
        Ok(buffer)
    }

    /// Lock the form for output and write it to `path`.
    #[instrument(skip(self))]
    pub async fn save(&mut self, path: &Path) -> Result<()> {
        let bytes = self.to_bytes()?;
        write_file(path, &bytes).await?;
        info!("Saved {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn acro_form(&self) -> Option<&Dictionary> {
        acroform::acro_form(&self.document)
    }

    pub fn acro_form_mut(&mut self) -> Option<&mut Dictionary> {
        acroform::acro_form_mut(&mut self.document)
    }

    pub fn field_handles(&self) -> Vec<FieldHandle> {
        acroform::field_handles(&self.document)
    }

    pub fn field(&self, handle: FieldHandle) -> Option<&Dictionary> {
        acroform::field(&self.document, handle)
    }

    pub fn field_mut(&mut self, handle: FieldHandle) -> Option<&mut Dictionary> {
        acroform::field_mut(&mut self.document, handle)
    }

    /// Field dictionaries in document order.
    pub fn fields(&self) -> impl Iterator<Item = &Dictionary> + '_ {
        self.field_handles()
            .into_iter()
            .filter_map(move |handle| self.field(handle))
    }

    /// Applies `f` to every field dictionary in document order.
    pub fn for_each_field_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Dictionary),
    {
        for handle in self.field_handles() {
            if let Some(field) = self.field_mut(handle) {
                f(field);
            }
        }
    }
}
