//! Markdown report.
//!
//! Layout: a title with the project name, a short bullet list, then one
//! fenced code block per file in path order. The opening fence carries the
//! file's language label.

use std::io::{self, Write};

use crate::{project::ProjectDescriptor, record::ScanResult};

/// Write the Markdown report to `out`.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_markdown<W: Write>(
    out: &mut W,
    descriptor: &ProjectDescriptor,
    scan: &ScanResult,
    with_contents: bool,
) -> io::Result<()> {
    writeln!(out, "# {}\n", descriptor.name)?;
    writeln!(out, "* Main language: {}", descriptor.dominant_type)?;
    writeln!(out, "* Package name: {}\n", descriptor.repository_or_unknown())?;

    writeln!(out, "## Source code\n")?;

    for file in scan.sorted() {
        writeln!(out, "### {}\n", file.path)?;

        if !with_contents {
            writeln!(out, "* {} lines of {}\n", file.line_count, file.language)?;
            continue;
        }

        writeln!(out, "```{}", file.language)?;
        out.write_all(file.contents.as_bytes())?;
        if !file.contents.is_empty() && !file.contents.ends_with('\n') {
            writeln!(out)?;
        }
        writeln!(out, "```\n")?;
    }

    Ok(())
}
