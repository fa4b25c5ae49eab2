//! Parse result, statistics, and diagnostics structures

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::section::Section;

/// Structured result of parsing one LAS file
///
/// Constructed in one pass over the input and not mutated afterwards.
/// Non-finite data values serialize as JSON `null`.
#[derive(Debug, Clone, Serialize)]
pub struct ParseResult {
    /// Header key to trimmed value; last occurrence of a key wins
    pub metadata: HashMap<String, String>,

    /// Curve names in order of appearance, duplicates preserved
    pub curves: Vec<String>,

    /// Numeric rows in file order; first column is the depth index
    pub data: Vec<Vec<f64>>,

    /// Line counters and optional skipped-line diagnostics
    pub stats: ParseStats,
}

impl ParseResult {
    /// Check whether nothing recognizable was found in the input
    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty() && self.curves.is_empty() && self.data.is_empty()
    }
}

/// Counters accumulated while parsing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Total number of input lines seen
    pub lines_total: usize,

    /// Number of data rows accepted
    pub rows_parsed: usize,

    /// Number of content lines skipped without contributing to the result
    pub lines_skipped: usize,

    /// Skipped-line diagnostics, populated only when warning collection is on
    pub warnings: Vec<ParseWarning>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }
}

/// One skipped-line diagnostic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseWarning {
    /// 1-based line number in the source file
    pub line: usize,

    /// Section that was active when the line was skipped
    pub section: Section,

    /// Why the line was skipped
    pub reason: String,
}
