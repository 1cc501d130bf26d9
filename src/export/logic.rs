// src/export/logic.rs

use crate::catalog::{Catalog, FilterQuery};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecordExport;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use std::path::Path;

/// Logica di alto livello per l'export della tabella unificata.
pub struct ExportLogic;

impl ExportLogic {
    /// Export delle righe che soddisfano `query`.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: path assoluto del file di output
    /// - `query`: anno e selezioni per sorgente; `FilterQuery::default()`
    ///   esporta l'intera tabella
    pub fn export(
        catalog: &Catalog,
        format: ExportFormat,
        file: &str,
        query: &FilterQuery,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let rows: Vec<RecordExport> = catalog
            .filter(query)
            .into_iter()
            .map(RecordExport::from)
            .collect();

        if rows.is_empty() {
            warning("No records match the selected filter; nothing exported.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(())
    }
}
