//! Application constants for LAS processor
//!
//! This module contains the LAS format markers, sentinel values, defaults,
//! and metadata key names used throughout the LAS processor application.

use std::path::Path;

// =============================================================================
// LAS Format Markers
// =============================================================================

/// Prefix introducing a section header line
pub const SECTION_MARKER: char = '~';

/// Prefix introducing a comment line
pub const COMMENT_MARKER: char = '#';

/// Substring identifying the well information section header (case-sensitive)
pub const WELL_SECTION_KEYWORD: &str = "Well";

/// Substring identifying the curve information section header (case-sensitive)
pub const CURVE_SECTION_KEYWORD: &str = "Curve";

/// Substring identifying the ASCII data section header (case-sensitive)
pub const DATA_SECTION_KEYWORD: &str = "Ascii";

/// Conventional "no reading" placeholder in data rows, passed through unmodified
pub const NULL_SENTINEL: f64 = -9999.0;

/// File extension for LAS files (matched case-insensitively)
pub const LAS_FILE_EXTENSION: &str = "las";

// =============================================================================
// Metadata Key Names
// =============================================================================

/// Well-header metadata keys read downstream from the parse result
pub mod metadata_keys {
    /// Well name
    pub const WELL: &str = "WELL";

    /// Well location
    pub const LOC: &str = "LOC";

    /// Start depth
    pub const STRT: &str = "STRT";

    /// Stop depth
    pub const STOP: &str = "STOP";

    /// Depth sampling step
    pub const STEP: &str = "STEP";
}

// =============================================================================
// Well Summary Defaults
// =============================================================================

/// Fallback well name when the WELL key is absent
pub const DEFAULT_WELL_NAME: &str = "Unknown";

/// Fallback location when the LOC key is absent
pub const DEFAULT_LOCATION: &str = "Unknown";

/// Fallback start depth when STRT is absent or unparseable
pub const DEFAULT_START_DEPTH: f64 = 0.0;

/// Fallback stop depth when STOP is absent or unparseable
pub const DEFAULT_STOP_DEPTH: f64 = 0.0;

/// Fallback sampling step when STEP is absent or unparseable
pub const DEFAULT_STEP: f64 = 1.0;

// =============================================================================
// Processing Configuration Defaults
// =============================================================================

/// Upper bound on the auto-detected worker count for the scan command
pub const MAX_DEFAULT_PARALLEL_WORKERS: usize = 8;

/// Maximum number of skipped-line diagnostics retained per parse
pub const DEFAULT_MAX_WARNINGS: usize = 1000;

/// Default number of parallel workers for the scan command
///
/// Sized to the available cores; parsing is I/O bound enough that going
/// beyond [`MAX_DEFAULT_PARALLEL_WORKERS`] does not pay off.
pub fn default_parallel_workers() -> usize {
    num_cpus::get().clamp(1, MAX_DEFAULT_PARALLEL_WORKERS)
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Check if a data value is the "no reading" sentinel
pub fn is_sentinel(value: f64) -> bool {
    value == NULL_SENTINEL
}

/// Check if a data value carries a usable reading (finite and not the sentinel)
pub fn is_usable_value(value: f64) -> bool {
    value.is_finite() && !is_sentinel(value)
}

/// Check if a path looks like a LAS file by extension
pub fn is_las_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(LAS_FILE_EXTENSION))
        .unwrap_or(false)
}

/// Parse the longest numeric prefix of a string as an `f64`
///
/// Trailing non-numeric text (such as a unit annotation glued to the number,
/// `8665.0FT`) is ignored. Returns `None` when no prefix parses, or when the
/// prefix is the literal `NaN`. Used for both data-row tokens and well-header
/// numeric coercion.
pub fn parse_leading_float(value: &str) -> Option<f64> {
    let trimmed = value.trim_start();
    let mut last_valid = None;

    for (idx, ch) in trimmed.char_indices() {
        let end = idx + ch.len_utf8();
        if trimmed[..end].parse::<f64>().is_ok() {
            last_valid = Some(end);
        }
    }

    last_valid
        .map(|end| trimmed[..end].parse::<f64>().unwrap_or(f64::NAN))
        .filter(|v| !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_sentinel_detection() {
        assert!(is_sentinel(-9999.0));
        assert!(!is_sentinel(-9999.5));
        assert!(!is_sentinel(0.0));
    }

    #[test]
    fn test_usable_value() {
        assert!(is_usable_value(2.35));
        assert!(is_usable_value(0.0));
        assert!(!is_usable_value(NULL_SENTINEL));
        assert!(!is_usable_value(f64::NAN));
        assert!(!is_usable_value(f64::INFINITY));
    }

    #[test]
    fn test_leading_float_ignores_trailing_text() {
        assert_eq!(parse_leading_float("8665.00 ft"), Some(8665.0));
        assert_eq!(parse_leading_float("8665.0FT"), Some(8665.0));
        assert_eq!(parse_leading_float("-120.5F"), Some(-120.5));
        assert_eq!(parse_leading_float("1e3 samples"), Some(1000.0));
        assert_eq!(parse_leading_float("  42"), Some(42.0));
    }

    #[test]
    fn test_leading_float_rejects_non_numeric() {
        assert_eq!(parse_leading_float("Gulf Coast"), None);
        assert_eq!(parse_leading_float(""), None);
        assert_eq!(parse_leading_float("ft 8665"), None);
        assert_eq!(parse_leading_float("NaN"), None);
    }

    #[test]
    fn test_default_workers_within_bounds() {
        let workers = default_parallel_workers();
        assert!(workers >= 1);
        assert!(workers <= MAX_DEFAULT_PARALLEL_WORKERS);
    }

    #[test]
    fn test_las_file_detection() {
        assert!(is_las_file(&PathBuf::from("well_01.las")));
        assert!(is_las_file(&PathBuf::from("/data/WELL_02.LAS")));
        assert!(!is_las_file(&PathBuf::from("well_01.csv")));
        assert!(!is_las_file(&PathBuf::from("las")));
    }
}
