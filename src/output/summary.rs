//! Human-readable scan summary for the terminal.

use colored::Colorize;
use humansize::{DECIMAL, format_size};

use crate::{project::ProjectDescriptor, record::ScanResult};

/// One-line summary of the scan.
///
/// ```text
/// 📦 example.com/foo (Go): 15 files, 1950 lines, 58.3 kB
/// ```
#[must_use]
pub fn summary_line(descriptor: &ProjectDescriptor, scan: &ScanResult) -> String {
    format!(
        "📦 {descriptor}: {} files, {} lines, {}",
        scan.len().to_string().bright_white(),
        scan.total_lines().to_string().bright_white(),
        format_size(scan.total_bytes(), DECIMAL).bright_green().bold()
    )
}

/// Print [`summary_line`] to stderr, keeping stdout for the report itself.
pub fn print_summary(descriptor: &ProjectDescriptor, scan: &ScanResult) {
    eprintln!("{}", summary_line(descriptor, scan));
}
