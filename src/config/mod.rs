//! Configuration types and options for the application.
//!
//! This module contains all configuration structures used throughout the application,
//! including scanning and output options and the persistent configuration file.

pub mod file;
pub mod output;
pub mod scan;

pub use file::FileConfig;
pub use output::{OutputFormat, OutputOptions};
pub use scan::ScanOptions;
