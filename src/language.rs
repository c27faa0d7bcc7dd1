//! Source language classification.
//!
//! Maps file extensions to a [`Language`]. Header extensions shared by C and
//! C++ map to the ambiguous [`Language::CFamilyHeader`] variant; the project
//! resolver decides what they mean from the rest of the tree.

use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter, Result},
    path::Path,
};

use serde::{Serialize, Serializer};

/// Language of a source file, or the `Unknown` sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    Go,
    Cpp,
    C,
    /// `.h`, `.hpp` and friends; could be C or C++.
    CFamilyHeader,
    Rust,
    Python,
    /// Extension outside the supported set. Never produced for scanned files.
    Unrecognized,
}

impl Language {
    /// Classify a lowercase extension including the leading dot (e.g. `".rs"`).
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            ".go" => Self::Go,
            ".cpp" | ".cc" | ".cxx" => Self::Cpp,
            ".c" => Self::C,
            ".h" | ".hpp" | ".hh" | ".hxx" => Self::CFamilyHeader,
            ".rs" => Self::Rust,
            ".py" => Self::Python,
            _ => Self::Unrecognized,
        }
    }

    /// Classify a path by its extension, case-insensitively.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(Self::Unrecognized, |ext| {
                Self::from_extension(&format!(".{}", ext.to_ascii_lowercase()))
            })
    }

    #[must_use]
    pub const fn is_recognized(self) -> bool {
        !matches!(self, Self::Unrecognized)
    }

    /// Human-readable label used in reports and as the histogram key.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Go => "Go",
            Self::Cpp => "C++",
            Self::C => "C",
            Self::CFamilyHeader => "C/C++ Header",
            Self::Rust => "Rust",
            Self::Python => "Python",
            Self::Unrecognized => "Unknown",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.label())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// File counts per language.
///
/// Keys are ordered by label, which is also the tie-break order used by
/// [`LanguageHistogram::dominant`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LanguageHistogram(BTreeMap<&'static str, (Language, usize)>);

impl LanguageHistogram {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, language: Language) {
        self.0.entry(language.label()).or_insert((language, 0)).1 += 1;
    }

    #[must_use]
    pub fn count(&self, language: Language) -> usize {
        self.0.get(language.label()).map_or(0, |(_, n)| *n)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(language, count)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (Language, usize)> + '_ {
        self.0.values().copied()
    }

    /// The language with the strictly highest count.
    ///
    /// Equal counts resolve to the lexicographically smallest label, so the
    /// answer never depends on insertion order. An empty histogram yields
    /// [`Language::Unrecognized`].
    #[must_use]
    pub fn argmax(&self) -> Language {
        let mut best = (Language::Unrecognized, 0);
        // Label order + strict comparison keeps the first of equal counts
        for (language, count) in self.iter() {
            if count > best.1 {
                best = (language, count);
            }
        }
        best.0
    }

    /// [`argmax`](Self::argmax) with the header ambiguity resolved.
    ///
    /// A header-dominated tree counts as C++ if any C++ source is present,
    /// otherwise as C if any C source is present. Headers alone stay
    /// ambiguous.
    #[must_use]
    pub fn dominant(&self) -> Language {
        match self.argmax() {
            Language::CFamilyHeader if self.count(Language::Cpp) > 0 => Language::Cpp,
            Language::CFamilyHeader if self.count(Language::C) > 0 => Language::C,
            other => other,
        }
    }
}

impl FromIterator<Language> for LanguageHistogram {
    fn from_iter<I: IntoIterator<Item = Language>>(iter: I) -> Self {
        let mut histogram = Self::new();
        for language in iter {
            histogram.add(language);
        }
        histogram
    }
}

impl Serialize for LanguageHistogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(label, (_, count))| (label, count)))
    }
}
