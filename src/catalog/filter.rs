//! Year + per-source event filtering, with the dashboard's "Select All"
//! sentinel.

use crate::models::{DisasterRecord, SourceKind};

/// The sentinel value meaning "no filtering by event label".
pub const SELECT_ALL: &str = "all";

/// Event selection for one source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EventFilter {
    /// The "Select All" choice.
    #[default]
    All,
    /// Only the listed labels. An empty list matches nothing, like an
    /// emptied dropdown.
    Only(Vec<String>),
}

impl EventFilter {
    /// Build from raw selected values; the sentinel anywhere in the set wins.
    pub fn from_selected(values: &[String]) -> Self {
        if values.iter().any(|v| v == SELECT_ALL) {
            EventFilter::All
        } else {
            EventFilter::Only(values.to_vec())
        }
    }

    pub fn matches(&self, label: &str) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Only(labels) => labels.iter().any(|l| l == label),
        }
    }
}

/// One filter invocation: the selected year plus the three per-source
/// selections. `year: None` lifts the year constraint (full export).
#[derive(Debug, Clone, Default)]
pub struct FilterQuery {
    pub year: Option<i32>,
    pub desinventar: EventFilter,
    pub emdat: EventFilter,
    pub dartmouth: EventFilter,
}

impl FilterQuery {
    /// Year filter with every source at "Select All".
    pub fn for_year(year: i32) -> Self {
        Self {
            year: Some(year),
            ..Default::default()
        }
    }

    pub fn selection(&self, source: SourceKind) -> &EventFilter {
        match source {
            SourceKind::DesInventar => &self.desinventar,
            SourceKind::EmDat => &self.emdat,
            SourceKind::Dartmouth => &self.dartmouth,
        }
    }

    /// A row matches when the year agrees and its own source's selection
    /// admits the label. Rows without a year never match a concrete year.
    pub fn matches(&self, record: &DisasterRecord) -> bool {
        if let Some(year) = self.year
            && record.year != Some(year)
        {
            return false;
        }
        self.selection(record.source).matches(&record.event)
    }
}
