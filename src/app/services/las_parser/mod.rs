//! LAS text parser for well-log files
//!
//! This module provides a single-pass parser for Log ASCII Standard (LAS)
//! files. The format is line-oriented: `~` lines introduce sections named by
//! keyword substring (`Well`, `Curve`, `Ascii`), `#` lines are comments, and
//! everything else is interpreted according to the active section.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration and file handling
//! - [`section`] - Section state and header detection
//! - [`metadata`] - Well-information key/value extraction
//! - [`data`] - Numeric data row tokenization
//! - [`result`] - Parse result, statistics, and diagnostics structures
//!
//! ## Usage
//!
//! ```rust
//! use las_processor::app::services::las_parser::LasParser;
//!
//! # async fn example() -> las_processor::Result<()> {
//! let parser = LasParser::new();
//! let result = parser.parse_file(std::path::Path::new("well.las")).await?;
//!
//! println!("Parsed {} curves and {} data rows",
//!          result.curves.len(),
//!          result.data.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure semantics
//!
//! The parser never fails on malformed content; unrecognized lines are
//! silently excluded. The only propagated error is an unreadable source
//! file. Callers that want to know what was dropped can enable diagnostics
//! via [`crate::LasConfig::with_warnings`].

pub mod data;
pub mod metadata;
pub mod parser;
pub mod result;
pub mod section;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::LasParser;
pub use result::{ParseResult, ParseStats, ParseWarning};
pub use section::Section;
