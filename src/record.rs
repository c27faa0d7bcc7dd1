//! Scan output data structures.
//!
//! [`FileRecord`] is produced once per accepted file and never mutated.
//! [`ScanResult`] is the frozen collection handed to the resolver and the
//! reporters.

use chrono::{DateTime, Local};

use crate::language::{Language, LanguageHistogram};

/// Metadata and contents of one accepted source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRecord {
    /// Path relative to the scan root, `/`-separated
    pub path: String,

    /// Language derived from the file extension
    pub language: Language,

    /// Number of lines, as counted by [`count_lines`]
    pub line_count: usize,

    /// Last modification time of the file
    pub modified: DateTime<Local>,

    /// Raw contents, decoded as lossy UTF-8
    pub contents: String,
}

impl FileRecord {
    /// Size of the contents in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

/// Count the lines of a file's contents.
///
/// Every newline-terminated line counts once, and so does a trailing line
/// without a newline; a final newline does not open a new line. `"a\nb\nc"`
/// and `"a\nb\nc\n"` both count 3, and the empty string counts 0.
#[must_use]
pub fn count_lines(contents: &str) -> usize {
    contents.lines().count()
}

/// Frozen result of a scan: the accepted files and their language histogram.
///
/// File order reflects task completion and carries no meaning; use
/// [`ScanResult::sorted`] for presentation.
#[derive(Clone, Debug, Default)]
pub struct ScanResult {
    files: Vec<FileRecord>,
    histogram: LanguageHistogram,
}

impl From<Vec<FileRecord>> for ScanResult {
    fn from(files: Vec<FileRecord>) -> Self {
        let histogram = files.iter().map(|f| f.language).collect();
        Self { files, histogram }
    }
}

impl ScanResult {
    #[must_use]
    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    #[must_use]
    pub const fn histogram(&self) -> &LanguageHistogram {
        &self.histogram
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Records ordered by path.
    #[must_use]
    pub fn sorted(&self) -> Vec<&FileRecord> {
        let mut files: Vec<_> = self.files.iter().collect();
        files.sort_by(|a, b| a.path.cmp(&b.path));
        files
    }

    #[must_use]
    pub fn find(&self, path: &str) -> Option<&FileRecord> {
        self.files.iter().find(|f| f.path == path)
    }

    /// Total size of all file contents in bytes.
    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.len() as u64).sum()
    }

    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.files.iter().map(|f| f.line_count).sum()
    }
}
