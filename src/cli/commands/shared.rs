//! Shared components for CLI commands
//!
//! Common helpers used across the command implementations: logging setup,
//! LAS file discovery, and progress reporting.

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::constants::is_las_file;
use crate::Result;

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("las_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Discover LAS files below a directory
///
/// Walks the tree recursively and keeps regular files with a `.las`
/// extension (matched case-insensitively). Results are sorted for a
/// consistent processing order.
pub fn discover_las_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    use walkdir::WalkDir;

    let mut las_files = Vec::new();

    for entry in WalkDir::new(input_dir).follow_links(false) {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_las_file(path) {
            las_files.push(path.to_path_buf());
        }
    }

    las_files.sort();

    debug!(
        "Discovered {} LAS files in {}",
        las_files.len(),
        input_dir.display()
    );
    for file in &las_files {
        debug!("  Found: {}", file.display());
    }

    Ok(las_files)
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Quote a value for CSV output when needed
pub fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("GR.GAPI"), "GR.GAPI");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_discover_las_files_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = discover_las_files(temp_dir.path()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_discover_las_files_filters_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("well_01.las")).unwrap();
        File::create(temp_dir.path().join("WELL_02.LAS")).unwrap();
        File::create(temp_dir.path().join("notes.txt")).unwrap();

        let nested = temp_dir.path().join("field");
        std::fs::create_dir(&nested).unwrap();
        File::create(nested.join("well_03.las")).unwrap();

        let result = discover_las_files(temp_dir.path()).unwrap();
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|p| is_las_file(p)));
    }
}
