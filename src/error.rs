//! Error types for the scanning core.
//!
//! Only traversal and extraction failures are fatal. Configuration sources
//! (ignore files, manifests, the config file) that exist but cannot be read
//! are reported through [`ConfigReadError`] and then treated as absent.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised while walking a tree.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The root is inaccessible or a directory could not be enumerated.
    #[error("failed to traverse '{path}': {source}")]
    Traversal {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// A selected file could not be stat'd or read.
    #[error("failed to read file '{path}': {source}")]
    FileExtraction {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ScanError {
    /// Path of the entry that caused the failure.
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Traversal { path, .. } | Self::FileExtraction { path, .. } => path,
        }
    }
}

/// A configuration source exists but could not be read.
///
/// Never propagated: callers log it and continue without the source.
#[derive(Error, Debug)]
#[error("failed to read '{path}': {source}")]
pub struct ConfigReadError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_file_extraction_message_names_path() {
        let err = ScanError::FileExtraction {
            path: PathBuf::from("src/main.go"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };

        assert_eq!(err.path(), &PathBuf::from("src/main.go"));
        assert_eq!(err.to_string(), "failed to read file 'src/main.go': gone");
    }

    #[test]
    fn test_config_read_error_message() {
        let err = ConfigReadError {
            path: PathBuf::from(".gitignore"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(err.to_string(), "failed to read '.gitignore': denied");
    }
}
