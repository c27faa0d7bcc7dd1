//! Core project identity data structures.
//!
//! This module defines the descriptor produced by the resolver: the project's
//! name, its repository hint, and the dominant language.

use std::fmt::{Display, Formatter, Result};

use crate::language::Language;

/// Where a project's name (and possibly type) came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Manifest {
    /// `go.mod` with a `module` line
    GoMod,
    /// `Cargo.toml` with a `name` field
    CargoToml,
    /// `pyproject.toml` with a `name` field
    PyprojectToml,
    /// `setup.py` with a `name=` argument
    SetupPy,
    /// `setup.cfg` with `name` under `[metadata]`
    SetupCfg,
    /// `CMakeLists.txt` with a `project(...)` call
    CMakeLists,
    /// `.git/config` with an `origin` remote
    GitConfig,
}

impl Manifest {
    /// Probe order; the first manifest that yields a name wins.
    pub const PROBE_ORDER: [Self; 7] = [
        Self::GoMod,
        Self::CargoToml,
        Self::PyprojectToml,
        Self::SetupPy,
        Self::SetupCfg,
        Self::CMakeLists,
        Self::GitConfig,
    ];

    /// Path of the marker file, relative to the project root.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::GoMod => "go.mod",
            Self::CargoToml => "Cargo.toml",
            Self::PyprojectToml => "pyproject.toml",
            Self::SetupPy => "setup.py",
            Self::SetupCfg => "setup.cfg",
            Self::CMakeLists => "CMakeLists.txt",
            Self::GitConfig => ".git/config",
        }
    }

    /// Language implied by the manifest alone, if any.
    #[must_use]
    pub const fn implied_language(self) -> Option<Language> {
        match self {
            Self::GoMod => Some(Language::Go),
            Self::CargoToml => Some(Language::Rust),
            Self::PyprojectToml | Self::SetupPy | Self::SetupCfg => Some(Language::Python),
            Self::CMakeLists | Self::GitConfig => None,
        }
    }
}

/// How the descriptor's name was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameSource {
    /// A manifest probe succeeded
    Manifest(Manifest),
    /// No probe succeeded; the root directory's name was used
    DirectoryName,
}

impl Display for NameSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Manifest(manifest) => f.write_str(manifest.file_name()),
            Self::DirectoryName => f.write_str("directory name"),
        }
    }
}

/// Identity and dominant language of the scanned project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectDescriptor {
    /// Project name (module path, package name, or directory name)
    pub name: String,

    /// Repository URL from the `origin` remote, when one is configured
    pub repository: Option<String>,

    /// Dominant language as decided by the winning probe or the fallback
    pub dominant_type: Language,

    /// Dominant language of the full recursive scan
    ///
    /// Equal to `dominant_type` on the fallback path; may differ when a
    /// manifest or the `.git/config` shortcut decided the type.
    pub scan_type: Language,

    /// Which probe produced the name
    pub source: NameSource,
}

impl ProjectDescriptor {
    /// Repository hint for display, `"Unknown"` when absent.
    #[must_use]
    pub fn repository_or_unknown(&self) -> &str {
        self.repository.as_deref().unwrap_or("Unknown")
    }
}

impl Display for ProjectDescriptor {
    /// Format as `name (type)`, e.g. `example.com/foo (Go)`.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.name, self.dominant_type)
    }
}
