use crate::catalog::Catalog;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::SourceKind;
use crate::ui::messages::{header, labelled};
use crate::utils::colors::painted_label;

/// Handle the `summary` command: per-source row counts, year span and
/// totals of the unified table.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let catalog = Catalog::load(cfg)?;

    header("Unified catalog");

    for (source, count) in catalog.counts_by_source() {
        println!("{:<24} {count} rows", painted_label(source));
    }
    println!();

    let span = match (catalog.earliest_year(), catalog.latest_year()) {
        (Some(a), Some(b)) => format!("{a}–{b}"),
        _ => "n/a".to_string(),
    };

    labelled("Total rows", catalog.len());
    labelled("Year span", span);
    labelled("Incomplete", catalog.incomplete_count());
    labelled(
        "Event labels",
        SourceKind::ALL
            .iter()
            .map(|&s| catalog.event_labels(s).len())
            .sum::<usize>(),
    );

    Ok(())
}
