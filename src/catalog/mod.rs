//! The unified disaster table. Built once from the three source files,
//! immutable afterwards; consumers borrow it and run queries.

pub mod filter;
pub mod loader;
pub mod schema;

pub use filter::{EventFilter, FilterQuery, SELECT_ALL};
pub use schema::{DateStyle, SourceSchema, schema_for};

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{DisasterRecord, SourceKind};

/// All unified rows, in source order (DesInventar, EM-DAT, Dartmouth), each
/// source internally in file order.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<DisasterRecord>,
}

impl Catalog {
    /// Load the three sources named by the configuration and concatenate
    /// them. With `drop_incomplete` set, rows missing a coordinate or a year
    /// are excluded from the unified table.
    pub fn load(cfg: &Config) -> AppResult<Self> {
        let mut records = Vec::new();

        for source in SourceKind::ALL {
            records.extend(loader::load_source(source, &cfg.source_path(source))?);
        }

        if cfg.drop_incomplete {
            records.retain(DisasterRecord::is_complete);
        }

        Ok(Self { records })
    }

    /// Wrap rows already in unified form (fixtures, library callers).
    pub fn from_records(records: Vec<DisasterRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[DisasterRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn count_for(&self, source: SourceKind) -> usize {
        self.records.iter().filter(|r| r.source == source).count()
    }

    pub fn counts_by_source(&self) -> [(SourceKind, usize); 3] {
        SourceKind::ALL.map(|s| (s, self.count_for(s)))
    }

    /// Rows kept in the table but not placeable on the map (only non-empty
    /// when the drop flag is off).
    pub fn incomplete_count(&self) -> usize {
        self.records.iter().filter(|r| !r.is_complete()).count()
    }

    /// Distinct years across the unified table, ascending. Feeds the year
    /// selector.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.records.iter().filter_map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    pub fn earliest_year(&self) -> Option<i32> {
        self.records.iter().filter_map(|r| r.year).min()
    }

    pub fn latest_year(&self) -> Option<i32> {
        self.records.iter().filter_map(|r| r.year).max()
    }

    /// Distinct event labels of one source, first-occurrence order, empty
    /// labels skipped. Feeds that source's dropdown.
    pub fn event_labels(&self, source: SourceKind) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();

        for r in self.records.iter().filter(|r| r.source == source) {
            if !r.event.is_empty() && !labels.iter().any(|l| l == &r.event) {
                labels.push(r.event.clone());
            }
        }

        labels
    }

    /// Rows matching the query, in table order. The length of the result is
    /// the dashboard's "Visible events" count.
    pub fn filter<'a>(&'a self, query: &FilterQuery) -> Vec<&'a DisasterRecord> {
        self.records.iter().filter(|r| query.matches(r)).collect()
    }
}
