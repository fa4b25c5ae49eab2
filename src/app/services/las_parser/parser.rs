//! Core LAS parser implementation
//!
//! This module provides the main parser orchestration: file reading, the
//! per-line section dispatch, and diagnostic collection.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use super::data::parse_data_row;
use super::metadata::MetadataMatcher;
use super::result::{ParseResult, ParseStats, ParseWarning};
use super::section::Section;
use crate::config::LasConfig;
use crate::constants::{COMMENT_MARKER, SECTION_MARKER};
use crate::{Error, Result};

/// LAS parser for well-log files
///
/// Holds the compiled metadata patterns and the diagnostic configuration.
/// Re-entrant: one parser can process any number of inputs, and parsing the
/// same input twice yields structurally identical results.
#[derive(Debug)]
pub struct LasParser {
    config: LasConfig,
    metadata: MetadataMatcher,
}

impl LasParser {
    /// Create a parser with the default (silent-skip) configuration
    pub fn new() -> Self {
        Self::with_config(LasConfig::default())
    }

    /// Create a parser with an explicit configuration
    pub fn with_config(config: LasConfig) -> Self {
        Self {
            config,
            metadata: MetadataMatcher::new(),
        }
    }

    /// Parse a LAS file from disk
    ///
    /// The only propagated failure is an unreadable file; malformed content
    /// never errors.
    pub async fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing LAS file: {}", file_path.display());

        let content = std::fs::read_to_string(file_path).map_err(|e| {
            Error::io(
                format!("Failed to read file {}", file_path.display()),
                e,
            )
        })?;

        let result = self.parse_str(&content);
        info!(
            "Parsed {} metadata entries, {} curves, {} data rows ({} lines skipped)",
            result.metadata.len(),
            result.curves.len(),
            result.data.len(),
            result.stats.lines_skipped
        );
        Ok(result)
    }

    /// Parse LAS content already held in memory
    ///
    /// Infallible: a file with no recognized sections produces a degenerate
    /// result with empty collections.
    pub fn parse_str(&self, content: &str) -> ParseResult {
        let mut metadata = HashMap::new();
        let mut curves: Vec<String> = Vec::new();
        let mut data: Vec<Vec<f64>> = Vec::new();
        let mut stats = ParseStats::new();

        let mut section = Section::None;

        for (index, raw_line) in content.lines().enumerate() {
            stats.lines_total += 1;
            let line_number = index + 1;
            let line = raw_line.trim();

            // Blank lines and comments are structural, not skipped content
            if line.is_empty() || line.starts_with(COMMENT_MARKER) {
                continue;
            }

            // Section headers switch state and are never data. An
            // unrecognized header leaves the active section in place.
            if line.starts_with(SECTION_MARKER) {
                match Section::detect(line) {
                    Some(next) => {
                        debug!("Entering {} section at line {}", next.name(), line_number);
                        section = next;
                    }
                    None => {
                        self.skip(
                            &mut stats,
                            line_number,
                            section,
                            format!("unrecognized section header '{}'", line),
                        );
                    }
                }
                continue;
            }

            match section {
                Section::None => {
                    self.skip(
                        &mut stats,
                        line_number,
                        section,
                        "line outside any recognized section".to_string(),
                    );
                }
                Section::Well => match self.metadata.extract(line) {
                    Some((key, value)) => {
                        // Overwrite on repeat: last occurrence wins
                        metadata.insert(key.to_string(), value.to_string());
                    }
                    None => {
                        self.skip(
                            &mut stats,
                            line_number,
                            section,
                            "well-information line matches neither key/value shape".to_string(),
                        );
                    }
                },
                Section::Curve => {
                    // First whitespace-delimited token, captured verbatim
                    if let Some(token) = line.split_whitespace().next() {
                        curves.push(token.to_string());
                    }
                }
                Section::Data => match parse_data_row(line) {
                    Some(row) => {
                        data.push(row);
                        stats.rows_parsed += 1;
                    }
                    None => {
                        self.skip(
                            &mut stats,
                            line_number,
                            section,
                            "data row dropped: leading token is not numeric".to_string(),
                        );
                    }
                },
            }
        }

        ParseResult {
            metadata,
            curves,
            data,
            stats,
        }
    }

    /// Record a skipped content line
    fn skip(&self, stats: &mut ParseStats, line: usize, section: Section, reason: String) {
        debug!("Skipped line {} [{}]: {}", line, section.name(), reason);
        stats.lines_skipped += 1;

        if self.config.collect_warnings && stats.warnings.len() < self.config.max_warnings {
            stats.warnings.push(ParseWarning {
                line,
                section,
                reason,
            });
        }
    }
}

impl Default for LasParser {
    fn default() -> Self {
        Self::new()
    }
}
