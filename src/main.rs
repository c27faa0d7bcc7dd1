//! # codesum
//!
//! Summarize a source tree as Markdown or JSON.
//!
//! The tool walks a directory, keeps files in the supported languages (Go,
//! C, C++, Rust, Python), skips anything matched by `.ignore`, `.gitignore` or
//! the built-in ignore list, and prints every file with its contents under a
//! short header naming the project and its main language.
//!
//! ## Usage
//!
//! ```bash
//! # Markdown summary of the current directory
//! codesum
//!
//! # JSON summary of another directory
//! codesum --json ~/src/project
//!
//! # File list and line counts only
//! codesum --no-contents
//! ```

use std::{
    io::{self, Write},
    path::Path,
    process::exit,
};

use anyhow::{Context, Result};
use clap::Parser;
use codesum::{
    cli::Cli,
    config::FileConfig,
    ignore::IgnoreSet,
    output::{print_summary, render},
    project::resolve,
    record::ScanResult,
    scanner::Scanner,
};
use colored::Colorize;
use tracing::Level;

/// Entry point for the codesum application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err:#}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// This function:
/// 1. Parses command-line arguments
/// 2. Loads the persistent configuration file (if present)
/// 3. Installs the log subscriber and configures the thread pool
/// 4. Loads the ignore set and scans the directory
/// 5. Resolves the project identity
/// 6. Writes the report to stdout
///
/// # Errors
///
/// This function can return errors from:
/// - Thread pool configuration
/// - Directory traversal or reading a selected file
/// - Writing the report
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    let file_config = FileConfig::load();
    let config = file_config.as_ref().ok();
    let defaults = FileConfig::default();
    let config = config.unwrap_or(&defaults);

    let scan_options = args.scan_options(config);
    let output_options = args.output_options(config);
    let json_mode = output_options.is_json();

    tracing_subscriber::fmt()
        .with_max_level(if scan_options.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = &file_config {
        tracing::warn!("{} {e:#}", "Failed to load config file:".yellow());
    }

    if scan_options.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(scan_options.threads)
            .build_global()?;
    }

    let root = args.dir.as_path();
    let ignores = IgnoreSet::load(root, &scan_options.ignore_files, &scan_options.ignore);

    let scan = scan_tree(root, &ignores, json_mode)?;

    let descriptor = resolve(root, &scan);

    if !json_mode {
        print_summary(&descriptor, &scan);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    render(&mut out, &descriptor, &scan, &output_options)?;
    out.flush()?;

    Ok(())
}

/// Scan `root`, naming the directory in the error so `main` can print it as is.
fn scan_tree(root: &Path, ignores: &IgnoreSet, quiet: bool) -> Result<ScanResult> {
    Scanner::new()
        .with_quiet(quiet)
        .walk(root, ignores)
        .with_context(|| format!("failed to scan {}", root.display()))
}
