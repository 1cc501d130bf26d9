use crate::catalog::{Catalog, FilterQuery};
use crate::cli::commands::{parse_events, parse_year};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        year,
        desinventar,
        emdat,
        dartmouth,
        force,
    } = cmd
    {
        let catalog = Catalog::load(cfg)?;

        // `--year` assente → nessun vincolo sull'anno (export completo).
        let year = match year {
            Some(raw) => Some(parse_year(raw)?),
            None => None,
        };

        let query = FilterQuery {
            year,
            desinventar: parse_events(desinventar),
            emdat: parse_events(emdat),
            dartmouth: parse_events(dartmouth),
        };

        ExportLogic::export(&catalog, format.clone(), file, &query, *force)?;
    }

    Ok(())
}
