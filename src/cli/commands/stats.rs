//! Stats command implementation
//!
//! Parses a LAS file and reports per-curve min/max/mean statistics, with
//! optional depth-range filtering and curve selection. The -9999 sentinel
//! and non-numeric placeholders are excluded from every aggregate.

use colored::Colorize;
use tracing::{info, warn};

use super::shared::{csv_field, setup_logging};
use crate::app::models::CurveSummary;
use crate::app::services::curve_stats::summarize_curves;
use crate::app::services::depth_records::rows_in_range;
use crate::app::services::las_parser::LasParser;
use crate::cli::args::{OutputFormat, StatsArgs};
use crate::Result;

/// Stats command runner
pub async fn run_stats(args: StatsArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    let parser = LasParser::new();
    let result = parser.parse_file(&args.file).await?;

    let rows = if args.start_depth.is_some() || args.stop_depth.is_some() {
        let filtered = rows_in_range(&result.data, args.start_depth, args.stop_depth);
        info!(
            "Depth filter kept {} of {} rows",
            filtered.len(),
            result.data.len()
        );
        filtered
    } else {
        result.data.clone()
    };

    let selection = args.get_curves();
    let summaries = summarize_curves(&result.curves, &rows, selection.as_deref());

    if summaries.is_empty() {
        warn!("No curves with usable samples in the selected range");
    }

    match args.output_format {
        OutputFormat::Human => print_human(&args, rows.len(), &summaries),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Csv => print_csv(&summaries),
    }

    Ok(())
}

fn print_human(args: &StatsArgs, row_count: usize, summaries: &[CurveSummary]) {
    println!("{}", "Curve Statistics".bold().underline());
    match (args.start_depth, args.stop_depth) {
        (None, None) => println!("  Rows: {}", row_count),
        (start, stop) => println!(
            "  Rows: {} (depth {} to {})",
            row_count,
            start.map_or("open".to_string(), |d| d.to_string()),
            stop.map_or("open".to_string(), |d| d.to_string()),
        ),
    }
    println!();

    if summaries.is_empty() {
        println!("  {}", "(no curves with usable samples)".dimmed());
        return;
    }

    println!(
        "  {:<12} {:>8} {:>12} {:>12} {:>12}",
        "CURVE".bold(),
        "SAMPLES".bold(),
        "MIN".bold(),
        "MAX".bold(),
        "MEAN".bold()
    );
    for summary in summaries {
        println!(
            "  {:<12} {:>8} {:>12.2} {:>12.2} {:>12.2}",
            summary.curve.green(),
            summary.samples,
            summary.min,
            summary.max,
            summary.mean
        );
    }
}

fn print_csv(summaries: &[CurveSummary]) {
    println!("curve,samples,min,max,mean");
    for summary in summaries {
        println!(
            "{},{},{},{},{}",
            csv_field(&summary.curve),
            summary.samples,
            summary.min,
            summary.max,
            summary.mean
        );
    }
}
