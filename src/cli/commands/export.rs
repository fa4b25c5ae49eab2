//! Export command implementation
//!
//! Parses a LAS file and writes a structured JSON document: the coerced
//! well summary, raw metadata, curve list, and depth records with values
//! keyed by curve name. Non-finite values serialize as `null`, matching
//! what downstream stores persisted.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;

use super::shared::setup_logging;
use crate::app::models::{DepthRecord, WellSummary};
use crate::app::services::depth_records::build_records;
use crate::app::services::las_parser::LasParser;
use crate::cli::args::ExportArgs;
use crate::{Error, Result};

/// Exported JSON document for one LAS file
#[derive(Debug, Serialize)]
struct ExportDocument<'a> {
    summary: WellSummary,
    metadata: BTreeMap<&'a String, &'a String>,
    curves: &'a [String],
    records: Vec<DepthRecord>,
}

/// Export command runner
pub async fn run_export(args: ExportArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    let parser = LasParser::new();
    let result = parser.parse_file(&args.file).await?;

    let document = ExportDocument {
        summary: WellSummary::from_metadata(&result.metadata),
        metadata: result.metadata.iter().collect(),
        curves: &result.curves,
        records: build_records(&result.curves, &result.data),
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };

    match &args.output_file {
        Some(path) => {
            std::fs::write(path, &json).map_err(|e| {
                Error::io(format!("Failed to write output file {}", path.display()), e)
            })?;
            info!(
                "Exported {} records to {}",
                document.records.len(),
                path.display()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}
