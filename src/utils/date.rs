use chrono::{Datelike, NaiveDate};

/// Calendar year of a `YYYY/MM/DD` cell (DesInventar `Date`).
pub fn year_from_ymd_slash(raw: &str) -> Option<i32> {
    NaiveDate::parse_from_str(raw.trim(), "%Y/%m/%d")
        .ok()
        .map(|d| d.year())
}

/// Calendar year of a `DD/MM/YYYY` cell (Dartmouth `Began`).
pub fn year_from_dmy_slash(raw: &str) -> Option<i32> {
    NaiveDate::parse_from_str(raw.trim(), "%d/%m/%Y")
        .ok()
        .map(|d| d.year())
}

/// Calendar year of a bare `YYYY` cell (EM-DAT `Start Year`).
/// Digits only: anything else in the cell means no year.
pub fn year_only(raw: &str) -> Option<i32> {
    let t = raw.trim();
    if t.is_empty() || !t.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    t.parse::<i32>().ok()
}
