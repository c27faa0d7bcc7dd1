//! Directory scanning and file collection functionality.
//!
//! This module provides the core scanning logic that traverses a directory
//! tree, prunes ignored subtrees, and collects every recognized source file.
//! The walk itself runs on one thread; reading each accepted file is handed to
//! the rayon pool so file I/O overlaps with traversal.

use std::{
    fs,
    path::Path,
    sync::{
        Mutex, MutexGuard, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
};

use chrono::{DateTime, Local};
use indicatif::{ProgressBar, ProgressStyle};
use walkdir::{DirEntry, WalkDir};

use crate::{
    Result,
    error::ScanError,
    ignore::IgnoreSet,
    language::Language,
    record::{FileRecord, ScanResult, count_lines},
    utils::slash_path,
};

/// Directory scanner collecting recognized source files.
///
/// The `Scanner` struct encapsulates the logic for traversing directory trees
/// and building a [`ScanResult`]. What to skip comes from the [`IgnoreSet`]
/// handed to [`Scanner::walk`]; the worker count is the rayon pool's.
#[derive(Default)]
pub struct Scanner {
    /// When `true`, suppresses progress spinner output (used by `--json` mode).
    quiet: bool,
}

/// State shared between the walking thread and extraction tasks.
#[derive(Default)]
struct Accumulator {
    records: Mutex<Vec<FileRecord>>,
    first_error: Mutex<Option<ScanError>>,
    failed: AtomicBool,
}

impl Accumulator {
    fn push(&self, record: FileRecord) {
        lock(&self.records).push(record);
    }

    /// Remember `error` unless an earlier one was already recorded.
    fn fail(&self, error: ScanError) {
        self.failed.store(true, Ordering::Release);
        lock(&self.first_error).get_or_insert(error);
    }

    fn has_failed(&self) -> bool {
        self.failed.load(Ordering::Acquire)
    }

    fn finish(self) -> Result<ScanResult> {
        let first_error = self
            .first_error
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(error) = first_error {
            return Err(error);
        }

        let records = self
            .records
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);

        Ok(ScanResult::from(records))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Scanner {
    /// Create a new scanner that shows a progress spinner.
    #[must_use]
    pub const fn new() -> Self {
        Self { quiet: false }
    }

    /// Enable or disable quiet mode (suppresses progress spinner).
    ///
    /// When quiet mode is active the scanning spinner is hidden, which is
    /// required for `--json` output so that only the final JSON is printed.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Walk the tree under `root` and collect every recognized, non-ignored file.
    ///
    /// Ignored directories are pruned without being descended. Each accepted
    /// file is stat'd, read and line-counted in its own rayon task; the
    /// finished record is appended to a shared list under a mutex.
    ///
    /// # Errors
    ///
    /// - [`ScanError::Traversal`] if the root is inaccessible or a directory
    ///   cannot be enumerated
    /// - [`ScanError::FileExtraction`] if a selected file cannot be stat'd or
    ///   read
    ///
    /// After the first failure no more files are scheduled, tasks already
    /// running are allowed to finish, and the first recorded error is
    /// returned. No partial result is ever returned.
    pub fn walk(&self, root: &Path, ignores: &IgnoreSet) -> Result<ScanResult> {
        let progress = self.progress_bar();
        let accumulator = Accumulator::default();

        rayon::scope(|scope| {
            let walker = WalkDir::new(root)
                .follow_links(false)
                .into_iter()
                .filter_entry(|entry| Self::should_descend(root, entry, ignores));

            for entry in walker {
                if accumulator.has_failed() {
                    break;
                }

                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        let path = e.path().unwrap_or(root).to_path_buf();
                        accumulator.fail(ScanError::Traversal { path, source: e });
                        break;
                    }
                };

                let Some((relative, language)) = Self::accept_file(root, &entry, ignores) else {
                    continue;
                };

                progress.tick();

                let accumulator = &accumulator;
                scope.spawn(move |_| match extract_record(entry.path(), relative, language) {
                    Ok(record) => accumulator.push(record),
                    Err(e) => accumulator.fail(e),
                });
            }
        });

        let result = accumulator.finish();

        match &result {
            Ok(scan) => progress.finish_with_message(format!("✅ Collected {} files", scan.len())),
            Err(_) => progress.abandon(),
        }

        result
    }

    fn progress_bar(&self) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message("Scanning source files...");
        pb
    }

    /// Decide whether `walkdir` should yield (and, for directories, descend into) an entry.
    ///
    /// The root is always kept. Directories matched by the ignore set are
    /// pruned together with their whole subtree. Files always pass; they are
    /// filtered in [`Scanner::accept_file`].
    fn should_descend(root: &Path, entry: &DirEntry, ignores: &IgnoreSet) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }

        let relative = relative_path(root, entry.path());
        if ignores.should_skip(&relative) {
            tracing::debug!("pruning ignored directory {relative}");
            return false;
        }

        true
    }

    /// Return the relative path and language of a file the scan should read.
    ///
    /// `None` for directories, files with an unrecognized extension, and files
    /// matched by the ignore set.
    fn accept_file(
        root: &Path,
        entry: &DirEntry,
        ignores: &IgnoreSet,
    ) -> Option<(String, Language)> {
        if entry.file_type().is_dir() {
            return None;
        }

        let language = Language::from_path(entry.path());
        if !language.is_recognized() {
            return None;
        }

        let relative = relative_path(root, entry.path());
        if ignores.should_skip(&relative) {
            return None;
        }

        Some((relative, language))
    }
}

/// `/`-separated path of `path` relative to `root`.
fn relative_path(root: &Path, path: &Path) -> String {
    slash_path(path.strip_prefix(root).unwrap_or(path))
}

/// Stat, read and line-count one file.
///
/// The file handle lives only for the duration of the read.
///
/// # Errors
///
/// Returns [`ScanError::FileExtraction`] if the file cannot be stat'd or read,
/// for example because it was deleted after it was enumerated.
pub(crate) fn extract_record(
    path: &Path,
    relative: String,
    language: Language,
) -> Result<FileRecord> {
    let extraction_error = |source| ScanError::FileExtraction {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(path).map_err(extraction_error)?;
    let modified = metadata.modified().map_err(extraction_error)?;
    let bytes = fs::read(path).map_err(extraction_error)?;
    let contents = String::from_utf8_lossy(&bytes).into_owned();

    Ok(FileRecord {
        path: relative,
        language,
        line_count: count_lines(&contents),
        modified: DateTime::<Local>::from(modified),
        contents,
    })
}
