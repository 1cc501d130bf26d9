use crate::catalog::Catalog;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::SourceKind;
use crate::utils::colors::painted_label;

/// Handle the `events` command: distinct event labels per source, in
/// first-occurrence order (the dashboard's dropdown contents).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Events { source } = cmd {
        let sources: Vec<SourceKind> = match source {
            Some(code) => {
                let s = SourceKind::from_code(code)
                    .ok_or_else(|| AppError::InvalidSource(code.clone()))?;
                vec![s]
            }
            None => SourceKind::ALL.to_vec(),
        };

        let catalog = Catalog::load(cfg)?;

        for source in sources {
            println!("{}:", painted_label(source));
            for label in catalog.event_labels(source) {
                println!("  {label}");
            }
        }
    }

    Ok(())
}
