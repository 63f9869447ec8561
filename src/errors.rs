//! Unified application error type.
//! All modules (core, cli, config, export) return AppError to keep the
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
    // Session file format
    // ---------------------------
    #[error("Invalid session file: {0}")]
    Format(String),

    #[error("Malformed stroke table: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Batch-level
    // ---------------------------
    #[error("No valid sessions could be parsed from the given files")]
    NoValidSessions,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
