//! Report rendering.
//!
//! Turns a [`ScanResult`] and its [`ProjectDescriptor`] into the requested
//! format. Presentation order (files sorted by path) is decided here, not by
//! the scanner.

pub mod json;
pub mod markdown;
pub mod summary;

use std::io::{self, Write};

pub use json::JsonOutput;
pub use markdown::write_markdown;
pub use summary::print_summary;

use crate::{
    config::{OutputFormat, OutputOptions},
    project::ProjectDescriptor,
    record::ScanResult,
};

/// Write the report in the format selected by `options`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails or JSON serialization fails.
pub fn render<W: Write>(
    out: &mut W,
    descriptor: &ProjectDescriptor,
    scan: &ScanResult,
    options: &OutputOptions,
) -> io::Result<()> {
    match options.format {
        OutputFormat::Json => {
            let output = JsonOutput::new(descriptor, scan, options.contents);
            serde_json::to_writer_pretty(&mut *out, &output)?;
            writeln!(out)
        }
        OutputFormat::Markdown => write_markdown(out, descriptor, scan, options.contents),
    }
}
