//! Inspect command implementation
//!
//! Parses a single LAS file and reports the coerced well summary, raw header
//! metadata, curve declarations, and row counts. With `--warnings`, also
//! lists the skipped-line diagnostics the parser would normally discard.

use std::collections::BTreeMap;

use colored::Colorize;
use serde::Serialize;
use tracing::info;

use super::shared::{csv_field, setup_logging};
use crate::app::models::WellSummary;
use crate::app::services::las_parser::{LasParser, ParseResult};
use crate::cli::args::{InspectArgs, OutputFormat};
use crate::config::LasConfig;
use crate::Result;

/// Machine-readable inspect report
#[derive(Debug, Serialize)]
struct InspectReport<'a> {
    file: String,
    summary: WellSummary,
    metadata: BTreeMap<&'a String, &'a String>,
    curves: &'a [String],
    data_rows: usize,
    lines_total: usize,
    lines_skipped: usize,
}

/// Inspect command runner
pub async fn run_inspect(args: InspectArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    let config = if args.warnings {
        LasConfig::default().with_warnings()
    } else {
        LasConfig::default()
    };

    let parser = LasParser::with_config(config);
    let result = parser.parse_file(&args.file).await?;
    let summary = WellSummary::from_metadata(&result.metadata);

    info!(
        "Inspection complete: {} curves, {} rows",
        result.curves.len(),
        result.data.len()
    );

    match args.output_format {
        OutputFormat::Human => print_human(&args, &result, &summary),
        OutputFormat::Json => print_json(&args, &result, summary)?,
        OutputFormat::Csv => print_csv(&result),
    }

    Ok(())
}

fn print_human(args: &InspectArgs, result: &ParseResult, summary: &WellSummary) {
    println!("{}", "Well Summary".bold().underline());
    println!("  Name:        {}", summary.name);
    println!("  Location:    {}", summary.location);
    println!("  Start depth: {}", summary.start_depth);
    println!("  Stop depth:  {}", summary.stop_depth);
    println!("  Step:        {}", summary.step);
    println!();

    println!("{}", "Header Metadata".bold().underline());
    if result.metadata.is_empty() {
        println!("  {}", "(none)".dimmed());
    } else {
        let sorted: BTreeMap<_, _> = result.metadata.iter().collect();
        for (key, value) in sorted {
            println!("  {:<8} {}", key.cyan(), value);
        }
    }
    println!();

    println!("{}", "Curves".bold().underline());
    if result.curves.is_empty() {
        println!("  {}", "(none)".dimmed());
    } else {
        for (index, curve) in result.curves.iter().enumerate() {
            println!("  [{}] {}", index, curve.green());
        }
    }
    println!();

    println!("{}", "Data".bold().underline());
    println!("  Rows parsed:   {}", result.data.len());
    println!("  Lines total:   {}", result.stats.lines_total);
    println!("  Lines skipped: {}", result.stats.lines_skipped);

    if args.warnings {
        println!();
        println!("{}", "Skipped Lines".bold().underline());
        if result.stats.warnings.is_empty() {
            println!("  {}", "(none)".dimmed());
        } else {
            for warning in &result.stats.warnings {
                println!(
                    "  line {:>5} [{}] {}",
                    warning.line.to_string().yellow(),
                    warning.section.name(),
                    warning.reason
                );
            }
        }
    }
}

fn print_json(args: &InspectArgs, result: &ParseResult, summary: WellSummary) -> Result<()> {
    let report = InspectReport {
        file: args.file.display().to_string(),
        summary,
        metadata: result.metadata.iter().collect(),
        curves: &result.curves,
        data_rows: result.data.len(),
        lines_total: result.stats.lines_total,
        lines_skipped: result.stats.lines_skipped,
    };

    let mut document = serde_json::to_value(&report)?;
    if args.warnings {
        document["warnings"] = serde_json::to_value(&result.stats.warnings)?;
    }

    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

fn print_csv(result: &ParseResult) {
    println!("key,value");
    let sorted: BTreeMap<_, _> = result.metadata.iter().collect();
    for (key, value) in sorted {
        println!("{},{}", csv_field(key), csv_field(value));
    }
}
