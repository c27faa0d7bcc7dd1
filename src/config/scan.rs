//! Scanning configuration options.
//!
//! This module defines the options that control how the directory tree is
//! walked and which ignore sources are consulted.

use std::path::PathBuf;

use crate::ignore::DEFAULT_IGNORE_FILES;

/// Configuration for directory scanning behavior.
///
/// Built once in `main` from the CLI and the configuration file, then passed
/// by reference to every component that needs it.
#[derive(Clone, Debug)]
pub struct ScanOptions {
    /// Whether to log pruned directories and probe misses
    pub verbose: bool,

    /// Number of worker threads for file extraction (0 = rayon default)
    pub threads: usize,

    /// Ignore files to read, relative to the scan root unless absolute
    pub ignore_files: Vec<PathBuf>,

    /// Extra ignore patterns merged with the ones from `ignore_files`
    pub ignore: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            threads: 0,
            ignore_files: DEFAULT_IGNORE_FILES.iter().map(PathBuf::from).collect(),
            ignore: Vec::new(),
        }
    }
}
