//! Scan command implementation
//!
//! Recursively discovers LAS files below a directory and parses them with a
//! bounded worker pool, reporting aggregate totals and per-file failures.

use std::sync::Arc;
use std::time::Instant;

use colored::Colorize;
use futures::StreamExt;
use serde::Serialize;
use tracing::{info, warn};

use super::shared::{create_progress_bar, discover_las_files, setup_logging};
use crate::app::services::las_parser::LasParser;
use crate::cli::args::{OutputFormat, ScanArgs};
use crate::Result;

/// Aggregate results of a directory scan
#[derive(Debug, Default, Clone, Serialize)]
pub struct ScanStats {
    /// Number of LAS files discovered
    pub files_found: usize,
    /// Number of files parsed successfully
    pub files_parsed: usize,
    /// Number of files that failed to read
    pub files_failed: usize,
    /// Number of files with no recognizable content
    pub empty_files: usize,
    /// Total data rows across all parsed files
    pub total_rows: usize,
    /// Total curve declarations across all parsed files
    pub total_curves: usize,
    /// Per-file failure messages
    pub errors: Vec<String>,
    /// Wall-clock scan duration in seconds
    pub duration_secs: f64,
}

/// Scan command runner
pub async fn run_scan(args: ScanArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    let start_time = Instant::now();

    info!("Scanning {} for LAS files", args.input_path.display());
    let files = discover_las_files(&args.input_path)?;

    let mut stats = ScanStats {
        files_found: files.len(),
        ..Default::default()
    };

    if files.is_empty() {
        warn!(
            "No LAS files found in {}",
            args.input_path.display()
        );
    }

    let progress = if args.show_progress() && !files.is_empty() {
        Some(create_progress_bar(files.len() as u64, "Parsing LAS files"))
    } else {
        None
    };

    let parser = Arc::new(LasParser::new());
    let mut outcomes = futures::stream::iter(files.into_iter().map(|file| {
        let parser = Arc::clone(&parser);
        async move {
            let outcome = parser.parse_file(&file).await;
            (file, outcome)
        }
    }))
    .buffer_unordered(args.workers);

    while let Some((file, outcome)) = outcomes.next().await {
        if let Some(pb) = &progress {
            pb.inc(1);
        }

        match outcome {
            Ok(result) => {
                stats.files_parsed += 1;
                stats.total_rows += result.data.len();
                stats.total_curves += result.curves.len();
                if result.is_empty() {
                    warn!("{} contains no recognizable sections", file.display());
                    stats.empty_files += 1;
                }
            }
            Err(error) => {
                stats.files_failed += 1;
                stats.errors.push(format!("{}: {}", file.display(), error));
            }
        }
    }

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    stats.duration_secs = start_time.elapsed().as_secs_f64();

    match args.output_format {
        OutputFormat::Human => print_human(&stats),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputFormat::Csv => print_csv(&stats),
    }

    Ok(())
}

fn print_human(stats: &ScanStats) {
    println!("{}", "Scan Report".bold().underline());
    println!("  Files found:   {}", stats.files_found);
    println!("  Files parsed:  {}", stats.files_parsed.to_string().green());
    println!("  Files failed:  {}", stats.files_failed.to_string().red());
    println!("  Empty files:   {}", stats.empty_files);
    println!("  Total curves:  {}", stats.total_curves);
    println!("  Total rows:    {}", stats.total_rows);
    println!("  Duration:      {:.2}s", stats.duration_secs);

    if !stats.errors.is_empty() {
        println!();
        println!("{}", "Failures".bold().underline());
        for error in &stats.errors {
            println!("  {}", error.red());
        }
    }
}

fn print_csv(stats: &ScanStats) {
    println!("files_found,files_parsed,files_failed,empty_files,total_curves,total_rows");
    println!(
        "{},{},{},{},{},{}",
        stats.files_found,
        stats.files_parsed,
        stats.files_failed,
        stats.empty_files,
        stats.total_curves,
        stats.total_rows
    );
}
