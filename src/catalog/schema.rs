//! Fixed per-source column mappings. The three catalogs ship with
//! incompatible headers and date layouts; everything the loader needs to
//! know about a source lives in this table.

use crate::models::SourceKind;
use crate::utils::date;

/// Date layout of a source's date column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `YYYY/MM/DD` (DesInventar `Date`)
    YearMonthDay,
    /// Bare `YYYY` (EM-DAT `Start Year`)
    YearOnly,
    /// `DD/MM/YYYY` (Dartmouth `Began`)
    DayMonthYear,
}

impl DateStyle {
    pub fn pattern(&self) -> &'static str {
        match self {
            DateStyle::YearMonthDay => "%Y/%m/%d",
            DateStyle::YearOnly => "%Y",
            DateStyle::DayMonthYear => "%d/%m/%Y",
        }
    }

    /// Calendar year of `raw` under this layout, or None when the cell does
    /// not parse. A cell in the wrong layout is a per-row miss, never an
    /// error.
    pub fn year_of(&self, raw: &str) -> Option<i32> {
        match self {
            DateStyle::YearMonthDay => date::year_from_ymd_slash(raw),
            DateStyle::YearOnly => date::year_only(raw),
            DateStyle::DayMonthYear => date::year_from_dmy_slash(raw),
        }
    }
}

/// Column set of one source file. Fixed, not configurable.
#[derive(Debug, Clone, Copy)]
pub struct SourceSchema {
    pub location: &'static str,
    pub latitude: &'static str,
    pub longitude: &'static str,
    pub date: &'static str,
    pub date_style: DateStyle,
    pub event: &'static str,
}

impl SourceSchema {
    /// Columns that must be present in the header; anything else in the file
    /// is ignored.
    pub fn required_columns(&self) -> [&'static str; 5] {
        [
            self.location,
            self.latitude,
            self.longitude,
            self.date,
            self.event,
        ]
    }
}

/// The per-source mapping table.
pub fn schema_for(source: SourceKind) -> SourceSchema {
    match source {
        SourceKind::DesInventar => SourceSchema {
            location: "Location",
            latitude: "latitude",
            longitude: "longitude",
            date: "Date",
            date_style: DateStyle::YearMonthDay,
            event: "Event",
        },
        SourceKind::EmDat => SourceSchema {
            location: "Location",
            latitude: "Latitude",
            longitude: "Longitude",
            date: "Start Year",
            date_style: DateStyle::YearOnly,
            event: "Disaster Type",
        },
        SourceKind::Dartmouth => SourceSchema {
            location: "Country",
            latitude: "lat",
            longitude: "long",
            date: "Began",
            date_style: DateStyle::DayMonthYear,
            event: "MainCause",
        },
    }
}
