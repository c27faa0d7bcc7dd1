//! Project identity detection.
//!
//! This module works out what the scanned tree *is*: its name, the repository
//! it comes from, and its dominant language. Marker files are consulted first;
//! the scan's language histogram is the fallback.
//!
//! ## Main Parts
//!
//! - [`ProjectDescriptor`] - The resolved identity handed to the reporters
//! - [`Manifest`] - The marker files probed, in priority order
//! - [`resolve`] - Runs the probes and the histogram fallback

#[allow(clippy::module_inception)]
pub mod project;
mod probes;
pub mod resolver;

pub use project::{Manifest, NameSource, ProjectDescriptor};
pub use resolver::resolve;
