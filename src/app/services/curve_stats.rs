//! Per-curve statistics over the parsed data matrix
//!
//! Computes min/max/mean for each curve, excluding the -9999 "no reading"
//! sentinel and non-numeric placeholders. Curves align with columns
//! positionally from index 0, so the first summary is normally the depth
//! channel itself. A curve with no usable samples is omitted rather than
//! reported with degenerate values.

use tracing::{debug, warn};

use crate::app::models::CurveSummary;
use crate::constants::is_usable_value;

/// Summarize curves over a set of data rows
///
/// `selection` restricts the output to the named curves (in selection
/// order); `None` summarizes every declared curve. Selected names that are
/// not declared in `curves` are skipped with a warning. Short rows are
/// tolerated: a row simply contributes no sample to columns it lacks.
pub fn summarize_curves(
    curves: &[String],
    rows: &[Vec<f64>],
    selection: Option<&[String]>,
) -> Vec<CurveSummary> {
    let selected: Vec<&String> = match selection {
        Some(names) => names.iter().collect(),
        None => curves.iter().collect(),
    };

    let mut summaries = Vec::new();

    for name in selected {
        let Some(index) = curves.iter().position(|c| c == name) else {
            warn!("Requested curve '{}' is not declared in this file", name);
            continue;
        };

        if let Some(summary) = summarize_column(name, index, rows) {
            summaries.push(summary);
        } else {
            debug!("Curve '{}' has no usable samples", name);
        }
    }

    summaries
}

/// Summarize one column of the data matrix
fn summarize_column(name: &str, index: usize, rows: &[Vec<f64>]) -> Option<CurveSummary> {
    let mut samples = 0usize;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0f64;

    for row in rows {
        let Some(&value) = row.get(index) else {
            continue;
        };
        if !is_usable_value(value) {
            continue;
        }

        samples += 1;
        min = min.min(value);
        max = max.max(value);
        sum += value;
    }

    if samples == 0 {
        return None;
    }

    Some(CurveSummary {
        curve: name.to_string(),
        samples,
        min,
        max,
        mean: sum / samples as f64,
    })
}
