//! Section state and header detection for LAS files

use serde::{Deserialize, Serialize};

use crate::constants::{CURVE_SECTION_KEYWORD, DATA_SECTION_KEYWORD, WELL_SECTION_KEYWORD};

/// Section of a LAS file currently being read
///
/// Dispatch over this enum replaces the informal string flag of typical
/// LAS readers. `None` means no recognized section header has been seen yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    /// Before the first recognized section header
    None,
    /// Well information section (key/value metadata)
    Well,
    /// Curve information section (ordered curve declarations)
    Curve,
    /// ASCII data section (depth-indexed numeric rows)
    Data,
}

impl Section {
    /// Detect the section introduced by a `~` header line
    ///
    /// Matching is a case-sensitive substring test against the whole header
    /// line, tried in fixed order. Returns `None` for headers of sections
    /// this parser does not recognize (version, parameter, other); those
    /// leave the caller's active section unchanged.
    pub fn detect(header_line: &str) -> Option<Section> {
        if header_line.contains(WELL_SECTION_KEYWORD) {
            Some(Section::Well)
        } else if header_line.contains(CURVE_SECTION_KEYWORD) {
            Some(Section::Curve)
        } else if header_line.contains(DATA_SECTION_KEYWORD) {
            Some(Section::Data)
        } else {
            None
        }
    }

    /// Short name for diagnostics and human output
    pub fn name(&self) -> &'static str {
        match self {
            Section::None => "none",
            Section::Well => "well",
            Section::Curve => "curve",
            Section::Data => "data",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_recognized_sections() {
        assert_eq!(Section::detect("~Well Information"), Some(Section::Well));
        assert_eq!(Section::detect("~Curve Information"), Some(Section::Curve));
        assert_eq!(Section::detect("~Ascii"), Some(Section::Data));
        assert_eq!(Section::detect("~Ascii Data Section"), Some(Section::Data));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(Section::detect("~WELL INFORMATION"), None);
        assert_eq!(Section::detect("~ASCII"), None);
        assert_eq!(Section::detect("~curve information"), None);
    }

    #[test]
    fn test_unrecognized_sections() {
        assert_eq!(Section::detect("~Version Information"), None);
        assert_eq!(Section::detect("~Parameter Information"), None);
        assert_eq!(Section::detect("~Other"), None);
    }

    #[test]
    fn test_detection_order_prefers_well() {
        // A pathological header naming several sections resolves in fixed order
        assert_eq!(
            Section::detect("~Well and Curve Information"),
            Some(Section::Well)
        );
    }
}
