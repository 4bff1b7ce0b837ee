// src/export/logic.rs

use crate::db::pool::DbPool;
use crate::db::queries::{ActivityFilter, find_activities};
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{ActivityExport, ExportFormat};
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the activities matching `filter` to `file`.
    /// Returns the number of exported activities; nothing is written when none match.
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        filter: &ActivityFilter,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let items: Vec<ActivityExport> = find_activities(pool, filter)?
            .iter()
            .map(ActivityExport::from)
            .collect();

        if items.is_empty() {
            warning("No activities match the selected filters. Nothing to export.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&items, path)?,
            ExportFormat::Json => export_json(&items, path)?,
        }

        tracing::info!(format = format.as_str(), count = items.len(), file, "export written");
        Ok(items.len())
    }
}
