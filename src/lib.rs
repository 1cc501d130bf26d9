//! hazatlas library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Summary => cli::commands::summary::handle(cfg),
        Commands::Years => cli::commands::years::handle(cfg),
        Commands::Events { .. } => cli::commands::events::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Cities => cli::commands::cities::handle(),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta
    let mut cfg = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load(),
    };

    // 3️⃣ applica eventuale override della directory dati
    if let Some(dir) = &cli.data_dir {
        cfg.set_data_dir(dir);
    }

    // 4️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg)
}
