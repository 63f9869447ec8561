//! oarlog library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! per-session parsing/segmentation/cleaning pipeline.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Merge { .. } => cli::commands::merge::handle(&cli.command, cfg),
        Commands::Inspect { .. } => cli::commands::inspect::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // `--test` bypasses the on-disk configuration entirely so test runs
    // never depend on (or touch) the user's setup.
    let cfg = if cli.test {
        Config::default()
    } else if let Some(path) = &cli.config {
        Config::load_from(path)?
    } else {
        Config::load()?
    };

    dispatch(&cli, &cfg)
}
