use crate::catalog::{Catalog, FilterQuery};
use crate::cli::commands::{parse_events, parse_year};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::RecordExport;
use crate::ui::messages::info;
use crate::utils::table::Table;

/// Handle the `list` command: the unified rows the map would show for the
/// selected year and event selections, plus the visible-events footer.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        year,
        desinventar,
        emdat,
        dartmouth,
        limit,
    } = cmd
    {
        let catalog = Catalog::load(cfg)?;

        // Anno esplicito, altrimenti l'anno più recente del catalogo (la
        // selezione di default del dashboard).
        let year = match year {
            Some(raw) => Some(parse_year(raw)?),
            None => catalog.latest_year(),
        };

        let query = FilterQuery {
            year,
            desinventar: parse_events(desinventar),
            emdat: parse_events(emdat),
            dartmouth: parse_events(dartmouth),
        };

        let matches = catalog.filter(&query);
        let visible = matches.len();

        if visible == 0 {
            info("No rows match the selected filter.");
        } else {
            let mut table = Table::new(vec![
                "Location",
                "latitude",
                "longitude",
                "Year",
                "EventLabel",
                "Database",
            ]);

            let shown = limit.unwrap_or(visible).min(visible);
            for record in &matches[..shown] {
                let row = RecordExport::from(*record);
                table.add_row(vec![
                    row.location,
                    record.latitude_str(),
                    record.longitude_str(),
                    record.year_str(),
                    row.event,
                    row.database,
                ]);
            }

            print!("{}", table.render());

            if shown < visible {
                println!("… {} more row(s) not shown", visible - shown);
            }
        }

        if let Some(year) = year {
            println!("\nYear: {year}");
        }
        println!("Visible events: {visible}");
    }

    Ok(())
}
