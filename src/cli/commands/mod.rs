pub mod cities;
pub mod config;
pub mod events;
pub mod export;
pub mod init;
pub mod list;
pub mod summary;
pub mod years;

use crate::catalog::filter::EventFilter;
use crate::errors::{AppError, AppResult};

/// Parse a `--year` argument. Anything that is not a calendar year is a CLI
/// error, not a silent skip.
pub(crate) fn parse_year(raw: &str) -> AppResult<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::InvalidYear(raw.to_string()))
}

/// Parse a comma-separated event selection. The `all` sentinel anywhere in
/// the list disables filtering for that source.
pub(crate) fn parse_events(raw: &str) -> EventFilter {
    let values: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    EventFilter::from_selected(&values)
}
