//! Load → fill → save and load → list runs

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    config::FillConfig,
    error::Result,
    form::{fill_in_field, log_field_names},
    pdf_document::PdfForm,
    utils::{now_millis, timestamped_output_path, DiagnosticSink},
};

/// Outcome of a completed fill run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillReport {
    pub output_path: PathBuf,
    pub filled: Vec<String>,
    pub missing: Vec<String>,
}

/// Single-shot fill run over one document
pub struct Pipeline {
    config: FillConfig,
    sink: Arc<dyn DiagnosticSink>,
}

impl Pipeline {
    pub fn new(config: FillConfig, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { config, sink }
    }

    /// Loads the input, fills every assignment in order and saves to a
    /// timestamped path. Missing fields are reported and skipped.
    #[instrument(skip(self), fields(input = %self.config.input.display()))]
    pub async fn execute(&self) -> Result<FillReport> {
        self.config.validate()?;

        let mut form = PdfForm::load(&self.config.input).await?;

        let mut filled = Vec::new();
        let mut missing = Vec::new();
        for assignment in &self.config.fields {
            if fill_in_field(&mut form, &assignment.field, &assignment.value, self.sink.as_ref()) {
                filled.push(assignment.field.clone());
            } else {
                missing.push(assignment.field.clone());
            }
        }

        let output_path = timestamped_output_path(
            &self.config.input,
            self.config.output_dir.as_deref(),
            now_millis(),
        );
        form.save(&output_path).await?;

        info!(
            "Filled {} of {} fields into {}",
            filled.len(),
            self.config.fields.len(),
            output_path.display()
        );

        Ok(FillReport {
            output_path,
            filled,
            missing,
        })
    }
}

/// Loads `input` and writes one line per named, typed field to `sink`.
#[instrument(skip(sink))]
pub async fn list_form_fields(input: &Path, sink: &dyn DiagnosticSink) -> Result<()> {
    let form = PdfForm::load(input).await?;
    log_field_names(&form, sink);
    Ok(())
}
