use super::source::SourceKind;
use serde::Serialize;

/// One row of the unified table. Built once by the loader, never mutated.
///
/// `year` is the calendar year extracted from the source's date field, or
/// `None` when the cell did not parse under that source's format.
/// `latitude`/`longitude` are `None` when the cell was missing, non-numeric
/// or non-finite.
#[derive(Debug, Clone, Serialize)]
pub struct DisasterRecord {
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub year: Option<i32>,
    pub event: String,
    pub source: SourceKind,
}

impl DisasterRecord {
    /// A row is complete when it can be placed on the map and on the year
    /// selector: coordinates and year all present.
    pub fn is_complete(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some() && self.year.is_some()
    }

    pub fn year_str(&self) -> String {
        self.year.map(|y| y.to_string()).unwrap_or_default()
    }

    pub fn latitude_str(&self) -> String {
        self.latitude.map(|v| v.to_string()).unwrap_or_default()
    }

    pub fn longitude_str(&self) -> String {
        self.longitude.map(|v| v.to_string()).unwrap_or_default()
    }
}
