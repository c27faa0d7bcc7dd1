//! Project identity resolution.
//!
//! Runs the manifest probes in [`Manifest::PROBE_ORDER`] and falls back to the
//! scan's language histogram when none of them names the project.

use std::{fs, path::Path};

use crate::{
    language::{Language, LanguageHistogram},
    record::ScanResult,
};

use super::{Manifest, NameSource, ProjectDescriptor, probes};

/// Derive the project descriptor for `root`.
///
/// The first probe that yields a name wins. Its type is the manifest's
/// implied language; for `CMakeLists.txt` it is the full-scan type, and for
/// `.git/config` it is the histogram of the root's immediate entries (falling
/// back to the full-scan type when no immediate entry is recognized). When no
/// probe hits, the name is the root directory's name and the type is the
/// full-scan type.
///
/// The repository hint always comes from the `origin` remote of
/// `.git/config`, whichever path decided the name.
#[must_use]
pub fn resolve(root: &Path, scan: &ScanResult) -> ProjectDescriptor {
    let scan_type = scan.histogram().dominant();
    let repository = probes::origin_url(root);

    for manifest in Manifest::PROBE_ORDER {
        let Some(name) = probes::probe(manifest, root) else {
            continue;
        };

        let dominant_type = match manifest {
            Manifest::GitConfig => match immediate_histogram(root).dominant() {
                Language::Unrecognized => scan_type,
                quick => quick,
            },
            _ => manifest.implied_language().unwrap_or(scan_type),
        };

        tracing::debug!("project named by {}: {name}", manifest.file_name());

        return ProjectDescriptor {
            name,
            repository,
            dominant_type,
            scan_type,
            source: NameSource::Manifest(manifest),
        };
    }

    ProjectDescriptor {
        name: directory_name(root),
        repository,
        dominant_type: scan_type,
        scan_type,
        source: NameSource::DirectoryName,
    }
}

/// Language histogram of the recognized files directly inside `root`.
///
/// Subdirectories are not entered and the ignore set is not consulted; this
/// is a quick guess, not a scan.
pub(crate) fn immediate_histogram(root: &Path) -> LanguageHistogram {
    let Ok(entries) = fs::read_dir(root) else {
        return LanguageHistogram::new();
    };

    entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
        .map(|entry| Language::from_path(&entry.path()))
        .filter(|language| language.is_recognized())
        .collect()
}

/// Name of the root directory, resolving `.` and relative paths first.
fn directory_name(root: &Path) -> String {
    let canonical = fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());

    canonical
        .file_name()
        .and_then(|name| name.to_str())
        .map_or_else(|| canonical.display().to_string(), str::to_string)
}
