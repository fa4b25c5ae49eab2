//! Command-line argument definitions for LAS processor
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

use crate::constants::default_parallel_workers;

/// CLI arguments for the LAS well-log processor
///
/// Parses Log ASCII Standard (LAS) well-log files and summarises the curve
/// data they contain.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "las-processor",
    version,
    about = "Parse LAS well-log files and summarise their curve data",
    long_about = "A tool for working with Log ASCII Standard (LAS) well-log files: inspect \
                  header metadata and curve declarations, compute per-curve statistics over \
                  depth ranges, export structured JSON, and scan whole directories of logs."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the LAS processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Inspect one LAS file: well summary, metadata, curves, row counts
    Inspect(InspectArgs),
    /// Compute per-curve statistics over an optional depth range
    Stats(StatsArgs),
    /// Export a parsed LAS file as structured JSON
    Export(ExportArgs),
    /// Scan a directory tree for LAS files and parse them all
    Scan(ScanArgs),
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// LAS file to inspect
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Show skipped-line diagnostics
    ///
    /// Collects a report of every content line the parser dropped (lines
    /// outside recognized sections, malformed metadata lines, data rows with
    /// non-numeric leading tokens). Acceptance behaviour is unchanged.
    #[arg(long = "warnings", help = "Show skipped-line diagnostics")]
    pub warnings: bool,

    /// Output format for the report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the stats command
#[derive(Debug, Clone, Parser)]
pub struct StatsArgs {
    /// LAS file to analyse
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Curves to summarise (comma-separated list)
    ///
    /// If not specified, every curve declared in the file is summarised.
    /// Names must match the curve declarations verbatim, unit suffix
    /// included (e.g. GR.GAPI).
    #[arg(
        short = 'c',
        long = "curves",
        value_name = "LIST",
        help = "Comma-separated list of curves to summarise"
    )]
    pub curves: Option<CurveList>,

    /// Lower depth bound (inclusive)
    #[arg(
        long = "start-depth",
        value_name = "DEPTH",
        help = "Only include rows at or below this depth value"
    )]
    pub start_depth: Option<f64>,

    /// Upper depth bound (inclusive)
    #[arg(
        long = "stop-depth",
        value_name = "DEPTH",
        help = "Only include rows at or above this depth value"
    )]
    pub stop_depth: Option<f64>,

    /// Output format for the statistics
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the statistics"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the export command
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// LAS file to export
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output file for the JSON document
    ///
    /// If not specified, the document is written to stdout.
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the JSON document"
    )]
    pub output_file: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long = "pretty", help = "Pretty-print the JSON output")]
    pub pretty: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the scan command
#[derive(Debug, Clone, Parser)]
pub struct ScanArgs {
    /// Directory to scan recursively for LAS files
    #[arg(value_name = "DIR")]
    pub input_path: PathBuf,

    /// Number of parallel workers
    ///
    /// Controls how many files are parsed concurrently.
    #[arg(
        short = 'j',
        long = "workers",
        value_name = "COUNT",
        default_value_t = default_parallel_workers(),
        help = "Number of parallel workers for parsing"
    )]
    pub workers: usize,

    /// Output format for the scan report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the scan report"
    )]
    pub output_format: OutputFormat,

    /// Suppress the progress bar
    #[arg(short = 'q', long = "quiet", help = "Suppress the progress bar")]
    pub quiet: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

/// Wrapper for parsing comma-separated curve lists
#[derive(Debug, Clone)]
pub struct CurveList {
    pub curves: Vec<String>,
}

impl FromStr for CurveList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let curves: Vec<String> = s
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if curves.is_empty() {
            return Err(Error::data_validation(
                "Curve list cannot be empty".to_string(),
            ));
        }

        Ok(CurveList { curves })
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

/// Map a verbosity count to a log level name
fn log_level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Validate that a path names an existing file
fn validate_input_file(file: &PathBuf) -> Result<()> {
    if !file.exists() {
        return Err(Error::file_not_found(file.display().to_string()));
    }
    if !file.is_file() {
        return Err(Error::configuration(format!(
            "Input path is not a file: {}",
            file.display()
        )));
    }
    Ok(())
}

impl InspectArgs {
    /// Validate the inspect command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_file(&self.file)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level_for(self.verbose)
    }
}

impl StatsArgs {
    /// Validate the stats command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_file(&self.file)?;

        if let (Some(start), Some(stop)) = (self.start_depth, self.stop_depth) {
            if start > stop {
                return Err(Error::configuration(
                    "start-depth must not exceed stop-depth".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Get the requested curve selection, if any
    pub fn get_curves(&self) -> Option<Vec<String>> {
        self.curves.as_ref().map(|list| list.curves.clone())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level_for(self.verbose)
    }
}

impl ExportArgs {
    /// Validate the export command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_file(&self.file)?;

        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level_for(self.verbose)
    }
}

impl ScanArgs {
    /// Validate the scan command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::configuration(format!(
                "Input path does not exist: {}",
                self.input_path.display()
            )));
        }
        if !self.input_path.is_dir() {
            return Err(Error::configuration(format!(
                "Input path is not a directory: {}",
                self.input_path.display()
            )));
        }

        if self.workers == 0 {
            return Err(Error::configuration(
                "Number of workers must be greater than 0".to_string(),
            ));
        }
        if self.workers > 100 {
            return Err(Error::configuration(
                "Number of workers cannot exceed 100".to_string(),
            ));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level_for(self.verbose)
    }

    /// Check if we should show the progress bar (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_curve_list_parsing() {
        // Valid single curve
        let result = CurveList::from_str("GR.GAPI").unwrap();
        assert_eq!(result.curves, vec!["GR.GAPI"]);

        // Valid multiple curves with spaces
        let result = CurveList::from_str(" GR.GAPI , RHOB.G/CC ").unwrap();
        assert_eq!(result.curves, vec!["GR.GAPI", "RHOB.G/CC"]);

        // Empty string
        assert!(CurveList::from_str("").is_err());

        // Only commas
        assert!(CurveList::from_str(",,,").is_err());
    }

    #[test]
    fn test_stats_args_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"~Well Information\n").unwrap();

        let args = StatsArgs {
            file: file.path().to_path_buf(),
            curves: None,
            start_depth: None,
            stop_depth: None,
            output_format: OutputFormat::Human,
            verbose: 0,
        };
        assert!(args.validate().is_ok());

        // Inverted depth range
        let mut invalid = args.clone();
        invalid.start_depth = Some(200.0);
        invalid.stop_depth = Some(100.0);
        assert!(invalid.validate().is_err());

        // Nonexistent input file
        let mut invalid = args.clone();
        invalid.file = PathBuf::from("/nonexistent/well.las");
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_scan_args_validation() {
        let temp_dir = TempDir::new().unwrap();

        let args = ScanArgs {
            input_path: temp_dir.path().to_path_buf(),
            workers: 4,
            output_format: OutputFormat::Human,
            quiet: false,
            verbose: 0,
        };
        assert!(args.validate().is_ok());

        let mut invalid = args.clone();
        invalid.workers = 0;
        assert!(invalid.validate().is_err());

        invalid.workers = 101;
        assert!(invalid.validate().is_err());

        let mut invalid = args.clone();
        invalid.input_path = PathBuf::from("/nonexistent/dir");
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = InspectArgs {
            file: PathBuf::from("well.las"),
            warnings: false,
            output_format: OutputFormat::Human,
            verbose: 0,
        };

        assert_eq!(args.get_log_level(), "warn");
        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");
        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");
        args.verbose = 5;
        assert_eq!(args.get_log_level(), "trace");
    }
}
