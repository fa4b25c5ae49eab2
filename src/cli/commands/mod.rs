//! Command implementations for LAS processor CLI
//!
//! This module contains the command execution logic and shared reporting
//! helpers for the CLI interface. Each command is implemented in its own
//! module.

pub mod export;
pub mod inspect;
pub mod scan;
pub mod shared;
pub mod stats;

pub use scan::ScanStats;

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Main command runner for LAS processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `inspect`: single-file report of metadata, curves, and row counts
/// - `stats`: per-curve statistics over an optional depth range
/// - `export`: structured JSON export of one parsed file
/// - `scan`: concurrent parse of every LAS file below a directory
pub async fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args).await,
        Commands::Stats(stats_args) => stats::run_stats(stats_args).await,
        Commands::Export(export_args) => export::run_export(export_args).await,
        Commands::Scan(scan_args) => scan::run_scan(scan_args).await,
    }
}
