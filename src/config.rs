//! Configuration for LAS parsing.
//!
//! Provides the parser configuration structure with builder-style methods.
//! The defaults preserve the documented silent-skip contract: malformed lines
//! are dropped without being reported. Stricter callers can opt in to
//! skipped-line diagnostics without changing which lines are accepted.

use crate::constants::DEFAULT_MAX_WARNINGS;
use serde::{Deserialize, Serialize};

/// Configuration for the LAS parser
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LasConfig {
    /// Collect skipped-line diagnostics during parsing
    pub collect_warnings: bool,

    /// Maximum number of diagnostics retained per parse
    pub max_warnings: usize,
}

impl Default for LasConfig {
    fn default() -> Self {
        Self {
            collect_warnings: false,
            max_warnings: DEFAULT_MAX_WARNINGS,
        }
    }
}

impl LasConfig {
    /// Enable skipped-line diagnostics
    pub fn with_warnings(mut self) -> Self {
        self.collect_warnings = true;
        self
    }

    /// Set the maximum number of retained diagnostics
    pub fn with_max_warnings(mut self, max_warnings: usize) -> Self {
        self.max_warnings = max_warnings;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preserves_silent_skip() {
        let config = LasConfig::default();
        assert!(!config.collect_warnings);
        assert_eq!(config.max_warnings, DEFAULT_MAX_WARNINGS);
    }

    #[test]
    fn test_builder_methods() {
        let config = LasConfig::default().with_warnings().with_max_warnings(5);
        assert!(config.collect_warnings);
        assert_eq!(config.max_warnings, 5);
    }
}
