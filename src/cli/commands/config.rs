use crate::catalog::loader::check_source;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::SourceKind;
use crate::ui::messages::{error, success};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK SOURCES ----
        if *check {
            // Ogni sorgente viene verificata: file presente + header con
            // tutte le colonne attese. Il primo errore interrompe il check.
            for source in SourceKind::ALL {
                let path = cfg.source_path(source);

                if let Err(e) = check_source(source, &path) {
                    error(format!("{}: {}", source.label(), e));
                    return Err(e);
                }

                success(format!("{}: {} OK", source.label(), path.display()));
            }

            success("All source files match their expected schemas.");
        }
    }

    Ok(())
}
