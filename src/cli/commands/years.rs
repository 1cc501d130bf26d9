use crate::catalog::Catalog;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `years` command: the values the dashboard's year selector
/// offers, ascending.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let catalog = Catalog::load(cfg)?;
    let years = catalog.years();

    if years.is_empty() {
        info("No dated rows in the catalog.");
        return Ok(());
    }

    for year in years {
        println!("{year}");
    }

    Ok(())
}
