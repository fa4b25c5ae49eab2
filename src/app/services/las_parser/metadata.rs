//! Well-information key/value extraction
//!
//! Lines in the well information section come in two shapes:
//!
//! ```text
//! STRT.F   8665.00 : START DEPTH      (with unit after the dot)
//! LOC.     Gulf Coast : LOCATION      (without unit)
//! ```
//!
//! The unit-bearing pattern is tried first so that a unit token is never
//! misparsed as the leading part of the value. The value capture is lazy, so
//! a description containing further colons splits at the first colon that
//! lets the remainder match.

use regex::Regex;

/// Compiled matchers for the two well-information line shapes
#[derive(Debug)]
pub struct MetadataMatcher {
    with_unit: Regex,
    without_unit: Regex,
}

impl MetadataMatcher {
    /// Compile the two line patterns
    pub fn new() -> Self {
        Self {
            // KEY.UNIT  VALUE : DESCRIPTION (unit and description discarded)
            with_unit: Regex::new(r"^(\w+)\.\w+\s+(.+?)\s*:\s*(.+)$")
                .expect("well-information pattern with unit is valid"),
            // KEY.  VALUE : DESCRIPTION (dot followed directly by whitespace)
            without_unit: Regex::new(r"^(\w+)\.\s+(.+?)\s*:\s*(.+)$")
                .expect("well-information pattern without unit is valid"),
        }
    }

    /// Extract the key and trimmed value from a well-information line
    ///
    /// Returns `None` when the line matches neither shape; such lines are
    /// skipped by the caller.
    pub fn extract<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        let captures = self
            .with_unit
            .captures(line)
            .or_else(|| self.without_unit.captures(line))?;

        let key = captures.get(1)?.as_str();
        let value = captures.get(2)?.as_str().trim();
        Some((key, value))
    }
}

impl Default for MetadataMatcher {
    fn default() -> Self {
        Self::new()
    }
}
