//! # codesum
//!
//! Summarize a source tree for pasting into a text-analysis tool.
//!
//! This library provides the core functionality for the codesum CLI tool:
//! walking a directory tree, skipping ignored paths, collecting recognized
//! source files with their line counts, and working out the project's name and
//! dominant language.
//!
//! ## Flow
//!
//! 1. [`IgnoreSet::load`] reads the ignore sources once
//! 2. [`Scanner::walk`] collects a [`ScanResult`]
//! 3. [`project::resolve`] derives a [`ProjectDescriptor`]
//! 4. [`output::render`] writes Markdown or JSON

pub mod cli;
pub mod config;
pub mod error;
pub mod ignore;
pub mod language;
pub mod output;
pub mod project;
pub mod record;
pub mod scanner;
pub mod utils;

pub use error::{ConfigReadError, ScanError};
pub use ignore::IgnoreSet;
pub use language::{Language, LanguageHistogram};
pub use project::ProjectDescriptor;
pub use record::{FileRecord, ScanResult};
pub use scanner::Scanner;

/// Result type for scanning operations
pub type Result<T> = std::result::Result<T, ScanError>;
