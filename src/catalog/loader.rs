//! CSV → unified rows. One parameterized reader keyed by the fixed mapping
//! table; the per-source differences live entirely in `schema`.

use std::path::Path;

use crate::catalog::schema::{SourceSchema, schema_for};
use crate::errors::{AppError, AppResult};
use crate::models::{DisasterRecord, SourceKind};

/// Header positions of the mapped columns inside one source file.
struct ColumnIndexes {
    location: usize,
    latitude: usize,
    longitude: usize,
    date: usize,
    event: usize,
}

fn resolve_columns(
    source: SourceKind,
    schema: &SourceSchema,
    headers: &csv::StringRecord,
) -> AppResult<ColumnIndexes> {
    let find = |column: &'static str| -> AppResult<usize> {
        headers
            .iter()
            .position(|h| h.trim() == column)
            .ok_or_else(|| AppError::SchemaMismatch {
                source: source.label().to_string(),
                column: column.to_string(),
            })
    };

    Ok(ColumnIndexes {
        location: find(schema.location)?,
        latitude: find(schema.latitude)?,
        longitude: find(schema.longitude)?,
        date: find(schema.date)?,
        event: find(schema.event)?,
    })
}

/// Numeric cell → coordinate. Missing, non-numeric or non-finite → None.
fn parse_coord(raw: &str) -> Option<f64> {
    let t = raw.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Read one source file into unified rows, preserving row order.
///
/// A missing mapped column aborts the whole load (`SchemaMismatch`); a cell
/// that fails to parse only blanks that field on that row. Short rows
/// contribute empty cells for the columns they lack.
pub fn load_source(source: SourceKind, path: &Path) -> AppResult<Vec<DisasterRecord>> {
    if !path.exists() {
        return Err(AppError::SourceNotFound(path.display().to_string()));
    }

    let schema = schema_for(source);
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let cols = resolve_columns(source, &schema, reader.headers()?)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let cell = |i: usize| row.get(i).unwrap_or("").trim();

        records.push(DisasterRecord {
            location: cell(cols.location).to_string(),
            latitude: parse_coord(cell(cols.latitude)),
            longitude: parse_coord(cell(cols.longitude)),
            year: schema.date_style.year_of(cell(cols.date)),
            event: cell(cols.event).to_string(),
            source,
        });
    }

    Ok(records)
}

/// Validate a source header without loading rows (used by `config --check`).
pub fn check_source(source: SourceKind, path: &Path) -> AppResult<()> {
    if !path.exists() {
        return Err(AppError::SourceNotFound(path.display().to_string()));
    }

    let schema = schema_for(source);
    let mut reader = csv::Reader::from_path(path)?;
    resolve_columns(source, &schema, reader.headers()?).map(|_| ())
}
