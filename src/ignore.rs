//! Exclusion patterns for the scanner.
//!
//! An [`IgnoreSet`] is built once per run from ignore files (`.ignore`,
//! `.gitignore` by default), extra patterns from the configuration file, and a
//! fixed list of directories that are always excluded.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use glob::{MatchOptions, Pattern};

use crate::utils::read_or_warn;

/// Directory names excluded from every scan.
pub const BUILTIN_IGNORES: [&str; 5] = ["vendor", "test", "tmp", "backup", "node_modules"];

/// Ignore files read when none are configured.
pub const DEFAULT_IGNORE_FILES: [&str; 2] = [".ignore", ".gitignore"];

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Immutable set of ignore rules.
///
/// Each rule is kept as its raw string plus, when the string is a valid glob,
/// the compiled pattern. Invalid globs only ever match as path prefixes.
#[derive(Debug, Default)]
pub struct IgnoreSet {
    rules: BTreeMap<String, Option<Pattern>>,
}

impl IgnoreSet {
    /// Build the set from ignore files, extra patterns and the built-ins.
    ///
    /// Relative `sources` are resolved against `root`. Missing sources are
    /// skipped silently; unreadable ones are logged and skipped.
    #[must_use]
    pub fn load(root: &Path, sources: &[PathBuf], extra: &[String]) -> Self {
        let mut set = Self::default();

        for source in sources {
            let path = if source.is_absolute() {
                source.clone()
            } else {
                root.join(source)
            };

            let Some(content) = read_or_warn(&path) else {
                continue;
            };

            tracing::debug!("loading ignore patterns from {}", path.display());
            for pattern in parse_patterns(&content) {
                set.insert(pattern);
            }
        }

        for pattern in extra {
            set.insert(pattern);
        }

        for dir in BUILTIN_IGNORES {
            set.insert(dir);
        }

        set
    }

    /// Set containing only the given patterns (no built-ins).
    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for pattern in patterns {
            set.insert(pattern.as_ref());
        }
        set
    }

    fn insert(&mut self, pattern: &str) {
        if self.rules.contains_key(pattern) {
            return;
        }
        self.rules
            .insert(pattern.to_string(), Pattern::new(pattern).ok());
    }

    #[must_use]
    pub fn contains(&self, pattern: &str) -> bool {
        self.rules.contains_key(pattern)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether a `/`-separated path relative to the scan root is excluded.
    ///
    /// True if the base name matches a glob rule, or the path starts with a
    /// rule followed by `/`.
    #[must_use]
    pub fn should_skip(&self, relative: &str) -> bool {
        let base = relative.rsplit('/').next().unwrap_or(relative);

        self.rules.iter().any(|(raw, glob)| {
            glob.as_ref()
                .is_some_and(|pattern| pattern.matches_with(base, MATCH_OPTIONS))
                || relative
                    .strip_prefix(raw.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }
}

/// Patterns from the text of one ignore file: trimmed, non-empty, not `#` comments.
fn parse_patterns(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_patterns_skips_blank_and_comments() {
        let content = "# deps\nvendor\n\n   \n  *.pb.go  \n#tmp\n";
        let patterns: Vec<_> = parse_patterns(content).collect();
        assert_eq!(patterns, vec!["vendor", "*.pb.go"]);
    }

    #[test]
    fn test_builtins_always_present() {
        let temp = TempDir::new().unwrap();
        let set = IgnoreSet::load(temp.path(), &[PathBuf::from(".ignore")], &[]);

        for dir in BUILTIN_IGNORES {
            assert!(set.contains(dir), "missing built-in {dir}");
        }
        assert_eq!(set.len(), BUILTIN_IGNORES.len());
    }

    #[test]
    fn test_load_merges_sources_and_extra() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".ignore"), "gen\n# comment\n").unwrap();
        fs::write(temp.path().join(".gitignore"), "*.pb.go\nvendor\n").unwrap();

        let sources: Vec<PathBuf> = DEFAULT_IGNORE_FILES.iter().map(PathBuf::from).collect();
        let set = IgnoreSet::load(temp.path(), &sources, &["third_party".to_string()]);

        assert!(set.contains("gen"));
        assert!(set.contains("*.pb.go"));
        assert!(set.contains("third_party"));
        assert!(!set.contains("# comment"));
        // vendor appears twice but is stored once
        assert_eq!(set.len(), 3 + BUILTIN_IGNORES.len());
    }

    #[test]
    fn test_should_skip_glob_on_base_name() {
        let set = IgnoreSet::from_patterns(["*.pb.go", "vendor"]);

        assert!(set.should_skip("api/service.pb.go"));
        assert!(set.should_skip("service.pb.go"));
        assert!(set.should_skip("vendor"));
        assert!(set.should_skip("deep/nested/vendor"));
        assert!(!set.should_skip("api/service.go"));
        assert!(!set.should_skip("vendored"));
    }

    #[test]
    fn test_should_skip_prefix() {
        let set = IgnoreSet::from_patterns(["src/gen"]);

        assert!(set.should_skip("src/gen/types.rs"));
        assert!(set.should_skip("src/gen/deep/more.rs"));
        assert!(!set.should_skip("src/generated.rs"));
        assert!(!set.should_skip("lib/src/gen/types.rs"));
    }

    #[test]
    fn test_should_skip_is_case_sensitive() {
        let set = IgnoreSet::from_patterns(["Vendor"]);
        assert!(set.should_skip("Vendor"));
        assert!(!set.should_skip("vendor"));
    }

    #[test]
    fn test_glob_is_single_segment() {
        let set = IgnoreSet::from_patterns(["src*"]);
        // Only the base name is matched, so a deeper file is not excluded
        assert!(set.should_skip("src"));
        assert!(!set.should_skip("src/main.rs"));
    }

    #[test]
    fn test_malformed_pattern_never_matches_as_glob() {
        let set = IgnoreSet::from_patterns(["[abc"]);
        assert_eq!(set.len(), 1);
        assert!(!set.should_skip("[abc"));
        assert!(!set.should_skip("a"));
        // It still works as a literal prefix
        assert!(set.should_skip("[abc/file.rs"));
    }
}
