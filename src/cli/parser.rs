use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for hazatlas
/// CLI application to merge disaster-event catalogs into one map-ready table
#[derive(Parser)]
#[command(
    name = "hazatlas",
    version = env!("CARGO_PKG_VERSION"),
    about = "Merge the DesInventar, EM-DAT and Dartmouth disaster catalogs into one unified table",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Read every source CSV from this directory, keeping the configured file names
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory and default config file
    Init,

    /// Manage the configuration file (view or validate)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Validate that every source file exists and carries its required columns
        #[arg(
            long = "check",
            help = "Check each source file against its expected column set"
        )]
        check: bool,
    },

    /// Per-source row counts, year span and totals of the unified table
    Summary,

    /// Distinct years across the unified table, ascending
    Years,

    /// Distinct event labels, per source
    Events {
        /// Restrict to one source (desinventar, emdat, dartmouth)
        #[arg(
            long,
            value_name = "SOURCE",
            help = "Only list events of this source (desinventar, emdat, dartmouth)"
        )]
        source: Option<String>,
    },

    /// List unified rows for a year and per-source event selections
    List {
        /// Year to show (YYYY). If omitted, the latest year in the catalog.
        #[arg(long, short, value_name = "YYYY")]
        year: Option<String>,

        /// Comma-separated DesInventar event labels ("all" = no filtering)
        #[arg(long, value_name = "EVENTS", default_value = "all")]
        desinventar: String,

        /// Comma-separated EM-DAT disaster types ("all" = no filtering)
        #[arg(long, value_name = "EVENTS", default_value = "all")]
        emdat: String,

        /// Comma-separated Dartmouth main causes ("all" = no filtering)
        #[arg(long, value_name = "EVENTS", default_value = "all")]
        dartmouth: String,

        /// Show at most N rows (the visible-events count stays unclipped)
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Print the fixed map locations (zoom shortcuts and default view)
    Cities,

    /// Export the unified table (optionally filtered) in various formats
    Export {
        /// Export format: csv, json, xlsx
        #[arg(long, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Restrict to one year (YYYY). If omitted, every row is exported.
        #[arg(long, value_name = "YYYY")]
        year: Option<String>,

        /// Comma-separated DesInventar event labels ("all" = no filtering)
        #[arg(long, value_name = "EVENTS", default_value = "all")]
        desinventar: String,

        /// Comma-separated EM-DAT disaster types ("all" = no filtering)
        #[arg(long, value_name = "EVENTS", default_value = "all")]
        emdat: String,

        /// Comma-separated Dartmouth main causes ("all" = no filtering)
        #[arg(long, value_name = "EVENTS", default_value = "all")]
        dartmouth: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
