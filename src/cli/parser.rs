use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for oarlog
/// CLI tool to merge and clean per-stroke rowing telemetry
#[derive(Parser)]
#[command(
    name = "oarlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Parse SpeedCoach per-stroke exports, split out-and-back legs, and merge sessions",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<PathBuf>,

    /// Run with built-in defaults, ignoring the user configuration file
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Merge session files into one cleaned dataset and export it
    Merge {
        /// Session files exported by the head unit, in merge order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: PathBuf,

        /// Overwrite the output file without asking
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print a per-session summary of the cleaned data
    Inspect {
        /// Session files exported by the head unit
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}
