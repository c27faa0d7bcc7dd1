//! Output configuration for the report.
//!
//! This module defines which format the report is rendered in and whether
//! file contents are included.

use clap::ValueEnum;
use serde::Deserialize;

/// Report format.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown document with one fenced block per file
    #[default]
    Markdown,

    /// Pretty-printed JSON document
    Json,
}

/// Configuration for rendering the report.
#[derive(Clone, Debug)]
pub struct OutputOptions {
    /// Report format
    pub format: OutputFormat,

    /// Whether file contents are included in the report
    pub contents: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Markdown,
            contents: true,
        }
    }
}

impl OutputOptions {
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
