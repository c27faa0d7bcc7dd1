//! JSON report.
//!
//! A single pretty-printed document carrying every [`FileRecord`] field and
//! the whole [`ProjectDescriptor`].

use serde::Serialize;

use crate::{
    language::{Language, LanguageHistogram},
    project::ProjectDescriptor,
    record::{FileRecord, ScanResult},
};

/// Timestamp format used for `last_modified`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Top-level JSON document.
#[derive(Serialize, Debug)]
pub struct JsonOutput<'a> {
    pub name: &'a str,
    pub repository: &'a str,
    #[serde(rename = "type")]
    pub project_type: Language,
    pub scan_type: Language,
    pub source: String,
    pub languages: &'a LanguageHistogram,
    pub files: Vec<JsonFile<'a>>,
}

/// One file entry of the JSON document.
#[derive(Serialize, Debug)]
pub struct JsonFile<'a> {
    pub path: &'a str,
    pub language: Language,
    pub line_count: usize,
    pub last_modified: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<&'a str>,
}

impl<'a> JsonFile<'a> {
    fn from_record(record: &'a FileRecord, with_contents: bool) -> Self {
        Self {
            path: &record.path,
            language: record.language,
            line_count: record.line_count,
            last_modified: record.modified.format(TIMESTAMP_FORMAT).to_string(),
            contents: with_contents.then_some(record.contents.as_str()),
        }
    }
}

impl<'a> JsonOutput<'a> {
    /// Build the document; files are sorted by path.
    #[must_use]
    pub fn new(
        descriptor: &'a ProjectDescriptor,
        scan: &'a ScanResult,
        with_contents: bool,
    ) -> Self {
        Self {
            name: &descriptor.name,
            repository: descriptor.repository_or_unknown(),
            project_type: descriptor.dominant_type,
            scan_type: descriptor.scan_type,
            source: descriptor.source.to_string(),
            languages: scan.histogram(),
            files: scan
                .sorted()
                .into_iter()
                .map(|record| JsonFile::from_record(record, with_contents))
                .collect(),
        }
    }
}
