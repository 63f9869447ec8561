// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::notify_export_success;
use crate::models::dataset::Dataset;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export entry point for the merged dataset.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        dataset: &Dataset,
        format: &ExportFormat,
        file: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(file, force)?;

        if dataset.is_empty() {
            warning("Nothing to export: every stroke was dropped as turning data.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(dataset, file)?,
            ExportFormat::Json => export_json(dataset, file)?,
        }

        notify_export_success(format.as_str(), file);
        Ok(())
    }
}
