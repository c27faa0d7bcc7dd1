//! Utility functions and helpers.
//!
//! This module contains small filesystem helpers shared by the ignore-set
//! loader, the manifest probes and the configuration file loader.

use std::{fs, io::ErrorKind, path::Path};

use crate::error::ConfigReadError;

/// Read a plain-text configuration source that is allowed to be missing.
///
/// # Returns
///
/// - `Ok(Some(content))` if the file was read
/// - `Ok(None)` if the file does not exist
/// - `Err(ConfigReadError)` if the file exists but cannot be read
///
/// # Errors
///
/// Any I/O error other than `NotFound` is returned as a [`ConfigReadError`].
pub fn read_optional(path: &Path) -> Result<Option<String>, ConfigReadError> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ConfigReadError {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Like [`read_optional`], but logs unreadable sources and treats them as absent.
#[must_use]
pub fn read_or_warn(path: &Path) -> Option<String> {
    match read_optional(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("{e}; continuing without it");
            None
        }
    }
}

/// Render a path with `/` separators regardless of platform.
#[must_use]
pub fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
