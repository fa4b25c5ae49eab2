//! Data models for LAS processing
//!
//! This module defines the typed structures built on top of a parse result:
//! the coerced well summary, per-curve statistics, and depth-indexed records.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::constants::{
    metadata_keys, parse_leading_float, DEFAULT_LOCATION, DEFAULT_START_DEPTH, DEFAULT_STEP,
    DEFAULT_STOP_DEPTH, DEFAULT_WELL_NAME,
};

/// Typed well header built from parsed metadata
///
/// Numeric fields are coerced with leading-prefix float semantics so values
/// like `"8665.00 ft"` still yield a depth. Absent, unparseable, or zero
/// entries fall back to fixed defaults rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellSummary {
    /// Well name (`WELL` key)
    pub name: String,

    /// Well location (`LOC` key)
    pub location: String,

    /// Declared start depth (`STRT` key)
    pub start_depth: f64,

    /// Declared stop depth (`STOP` key)
    pub stop_depth: f64,

    /// Declared depth sampling step (`STEP` key)
    pub step: f64,
}

impl WellSummary {
    /// Build a summary from raw header metadata
    pub fn from_metadata(metadata: &HashMap<String, String>) -> Self {
        Self {
            name: metadata
                .get(metadata_keys::WELL)
                .cloned()
                .unwrap_or_else(|| DEFAULT_WELL_NAME.to_string()),
            location: metadata
                .get(metadata_keys::LOC)
                .cloned()
                .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            start_depth: coerce_depth(metadata.get(metadata_keys::STRT), DEFAULT_START_DEPTH),
            stop_depth: coerce_depth(metadata.get(metadata_keys::STOP), DEFAULT_STOP_DEPTH),
            step: coerce_depth(metadata.get(metadata_keys::STEP), DEFAULT_STEP),
        }
    }
}

/// Aggregate statistics for one curve over the data matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSummary {
    /// Curve name as declared in the curve information section
    pub curve: String,

    /// Number of usable samples (finite, non-sentinel)
    pub samples: usize,

    /// Minimum usable value
    pub min: f64,

    /// Maximum usable value
    pub max: f64,

    /// Arithmetic mean of usable values
    pub mean: f64,
}

/// One depth sample with values keyed by curve name
///
/// The mapping is built positionally: curve *i* pairs with column *i* of the
/// row. The first declared curve is conventionally the depth channel itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthRecord {
    /// Depth index (first column of the row)
    pub depth: f64,

    /// Curve name to recorded value
    pub values: BTreeMap<String, f64>,
}

/// Coerce a metadata value to a depth number, falling back to a default
///
/// A parsed zero also falls through to the default: the consumers this
/// summary feeds never distinguished a declared zero from an absent key, so
/// a `STEP` of `"0.0"` yields the default step rather than a degenerate
/// zero increment.
fn coerce_depth(value: Option<&String>, default: f64) -> f64 {
    value
        .and_then(|v| parse_leading_float(v))
        .filter(|v| *v != 0.0)
        .unwrap_or(default)
}
