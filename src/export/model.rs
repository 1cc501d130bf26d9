// src/export/model.rs

use crate::models::DisasterRecord;
use serde::Serialize;

/// Struttura "piatta" per l'export delle righe unificate. I nomi
/// serializzati sono le colonne canoniche della tabella unificata.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "latitude")]
    pub latitude: Option<f64>,
    #[serde(rename = "longitude")]
    pub longitude: Option<f64>,
    #[serde(rename = "Year")]
    pub year: Option<i32>,
    #[serde(rename = "EventLabel")]
    pub event: String,
    #[serde(rename = "Database")]
    pub database: String,
}

impl From<&DisasterRecord> for RecordExport {
    fn from(r: &DisasterRecord) -> Self {
        Self {
            location: r.location.clone(),
            latitude: r.latitude,
            longitude: r.longitude,
            year: r.year,
            event: r.event.clone(),
            database: r.source.label().to_string(),
        }
    }
}

/// Header per CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "Location",
        "latitude",
        "longitude",
        "Year",
        "EventLabel",
        "Database",
    ]
}

/// Convert one export row into display strings (column widths, tables).
pub(crate) fn record_to_row(r: &RecordExport) -> Vec<String> {
    vec![
        r.location.clone(),
        r.latitude.map(|v| v.to_string()).unwrap_or_default(),
        r.longitude.map(|v| v.to_string()).unwrap_or_default(),
        r.year.map(|y| y.to_string()).unwrap_or_default(),
        r.event.clone(),
        r.database.clone(),
    ]
}
