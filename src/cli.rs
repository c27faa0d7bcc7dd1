//! Command-line interface definition.
//!
//! Arguments are grouped the way they are consumed: scanning options and
//! output options. Each group is merged with the configuration file into the
//! matching options struct (**CLI argument > config file > default**).

use std::path::PathBuf;

use clap::Parser;

use crate::config::{FileConfig, OutputFormat, OutputOptions, ScanOptions, file::expand_tilde};

#[derive(Parser)]
struct OutputArgs {
    /// Output in JSON format (shorthand for `--format json`)
    #[arg(short = 'j', long, conflicts_with = "format")]
    json: bool,

    /// Report format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Only list files and line counts, without their contents
    #[arg(long)]
    no_contents: bool,
}

#[derive(Parser)]
struct ScanningArgs {
    /// The number of threads used to read files
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Log pruned directories, probe misses and unreadable sources
    #[arg(long)]
    verbose: bool,

    /// Ignore file to read instead of .ignore and .gitignore (repeatable)
    #[arg(long = "ignore-file", action = clap::ArgAction::Append)]
    ignore_files: Vec<PathBuf>,

    /// Extra ignore pattern (repeatable)
    #[arg(long, action = clap::ArgAction::Append)]
    ignore: Vec<String>,
}

#[derive(Parser)]
#[command(name = "codesum", version, disable_version_flag = true)]
#[command(about = "Summarize a source tree as Markdown or JSON")]
pub struct Cli {
    /// The directory to summarize
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Prints the version of the program
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    version: Option<bool>,

    /// Output options
    #[command(flatten)]
    output: OutputArgs,

    /// Scanning options
    #[command(flatten)]
    scanning: ScanningArgs,
}

impl Cli {
    #[must_use]
    pub fn scan_options(&self, config: &FileConfig) -> ScanOptions {
        let defaults = ScanOptions::default();
        let file = &config.scanning;

        let ignore_files = if self.scanning.ignore_files.is_empty() {
            file.ignore_files
                .as_ref()
                .map_or(defaults.ignore_files, |paths| {
                    paths.iter().map(|p| expand_tilde(p)).collect()
                })
        } else {
            self.scanning
                .ignore_files
                .iter()
                .map(|p| expand_tilde(p))
                .collect()
        };

        let mut ignore = file.ignore.clone().unwrap_or_default();
        ignore.extend(self.scanning.ignore.iter().cloned());

        ScanOptions {
            verbose: self.scanning.verbose || file.verbose.unwrap_or(defaults.verbose),
            threads: self
                .scanning
                .threads
                .or(file.threads)
                .unwrap_or(defaults.threads),
            ignore_files,
            ignore,
        }
    }

    #[must_use]
    pub fn output_options(&self, config: &FileConfig) -> OutputOptions {
        let defaults = OutputOptions::default();
        let file = &config.output;

        let format = if self.output.json {
            OutputFormat::Json
        } else {
            self.output
                .format
                .or(file.format)
                .unwrap_or(defaults.format)
        };

        let contents = !self.output.no_contents && file.contents.unwrap_or(defaults.contents);

        OutputOptions { format, contents }
    }
}
