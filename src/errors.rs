//! Unified application error type.
//! All modules (catalog, config, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // CSV-related
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Normalization errors
    // ---------------------------
    #[error("Schema mismatch in {source}: missing column '{column}'")]
    SchemaMismatch { r#source: String, column: String },

    #[error("Source file not found: {0}")]
    SourceNotFound(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid year: {0}")]
    InvalidYear(String),

    #[error("Unknown source: {0}")]
    InvalidSource(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
