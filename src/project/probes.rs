//! Manifest probes.
//!
//! Each probe reads one marker file and extracts a project name from it. The
//! parsers are deliberately line-based: they look for the one field they need
//! instead of parsing the whole file format.

use std::path::Path;

use crate::utils::read_or_warn;

use super::Manifest;

/// Run the probe for `manifest` against `root`.
///
/// # Returns
///
/// - `Some(name)` if the marker file exists and names the project
/// - `None` if it is missing, unreadable, or carries no name
pub(crate) fn probe(manifest: Manifest, root: &Path) -> Option<String> {
    let content = read_or_warn(&root.join(manifest.file_name()))?;

    let name = match manifest {
        Manifest::GoMod => parse_go_module(&content),
        Manifest::CargoToml | Manifest::PyprojectToml => parse_toml_name_field(&content),
        Manifest::SetupPy => extract_name_from_python_content(&content),
        Manifest::SetupCfg => extract_name_from_cfg_content(&content),
        Manifest::CMakeLists => parse_cmake_project(&content),
        Manifest::GitConfig => parse_origin_url(&content).and_then(|url| repository_name(&url)),
    };

    if name.is_none() {
        tracing::debug!("{} present but names no project", manifest.file_name());
    }

    name.filter(|n| !n.is_empty())
}

/// Origin URL from `<root>/.git/config`, if one is configured.
pub(crate) fn origin_url(root: &Path) -> Option<String> {
    let content = read_or_warn(&root.join(Manifest::GitConfig.file_name()))?;
    parse_origin_url(&content)
}

/// Module path from the first `module` directive of a `go.mod`.
fn parse_go_module(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("module "))
        .and_then(|rest| rest.split_whitespace().next())
        .map(|module| module.trim_matches('"').to_string())
}

/// Extract a quoted string value from a line.
fn extract_quoted_value(line: &str) -> Option<String> {
    let start = line.find('"')?;
    let end = line.rfind('"')?;

    if start == end {
        return None;
    }

    Some(line[start + 1..end].to_string())
}

/// Check if a line contains a name field assignment.
fn is_name_line(line: &str) -> bool {
    line.starts_with("name") && line.contains('=')
}

/// Parse the first `name = "..."` field from TOML content.
fn parse_toml_name_field(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| is_name_line(line))
        .find_map(extract_quoted_value)
}

/// Extract name from Python content (setup.py)
///
/// Takes the first `name=` keyword argument or assignment whose value is a
/// string literal. Identifiers that merely contain `name` (`__name__`,
/// `package_name`) and comparisons (`==`) are not assignments.
fn extract_name_from_python_content(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .find_map(python_name_value)
}

/// Quoted value assigned to a standalone `name` on this line.
fn python_name_value(line: &str) -> Option<String> {
    line.match_indices("name").find_map(|(at, _)| {
        let standalone = line[..at]
            .chars()
            .next_back()
            .is_none_or(|c| !(c.is_alphanumeric() || c == '_'));
        if !standalone {
            return None;
        }

        let value = line[at + "name".len()..]
            .trim_start()
            .strip_prefix('=')
            .filter(|rest| !rest.starts_with('='))?
            .trim_start();
        let quote = value.chars().next().filter(|c| matches!(c, '"' | '\''))?;
        let literal = &value[1..];
        literal.find(quote).map(|end| literal[..end].to_string())
    })
}

/// Extract name from INI-style configuration content (setup.cfg)
fn extract_name_from_cfg_content(content: &str) -> Option<String> {
    let mut in_metadata_section = false;

    for line in content.lines() {
        let line = line.trim();

        if line == "[metadata]" {
            in_metadata_section = true;
        } else if line.starts_with('[') && line.ends_with(']') {
            in_metadata_section = false;
        } else if in_metadata_section && is_name_line(line) {
            return line.split('=').nth(1).map(|name| name.trim().to_string());
        }
    }

    None
}

/// Project name from the first `project(<name> ...)` call of a `CMakeLists.txt`.
fn parse_cmake_project(content: &str) -> Option<String> {
    content.lines().map(str::trim).find_map(|line| {
        let lower = line.to_ascii_lowercase();
        let rest = lower
            .strip_prefix("project")
            .map(str::trim_start)
            .filter(|rest| rest.starts_with('('))?;
        // Slice the original line so the name keeps its case
        let offset = line.len() - rest.len() + 1;
        line[offset..]
            .split(|c: char| c.is_whitespace() || c == ')')
            .find(|token| !token.is_empty())
            .map(|name| name.trim_matches('"').to_string())
    })
}

/// URL of the `origin` remote in a git config file.
///
/// Only keys inside the `[remote "origin"]` section are considered; the
/// section ends at the next header.
fn parse_origin_url(content: &str) -> Option<String> {
    let mut in_origin = false;

    for line in content.lines() {
        let line = line.trim();

        if line.starts_with('[') {
            in_origin = line == r#"[remote "origin"]"#;
        } else if in_origin
            && let Some((key, value)) = line.split_once('=')
            && key.trim() == "url"
        {
            let url = value.trim();
            return (!url.is_empty()).then(|| url.to_string());
        }
    }

    None
}

/// Repository name from a remote URL: the last path segment without `.git`.
///
/// Handles both `https://host/owner/repo.git` and `git@host:owner/repo.git`.
fn repository_name(url: &str) -> Option<String> {
    url.trim_end_matches('/')
        .rsplit(['/', ':'])
        .next()
        .map(|segment| segment.trim_end_matches(".git"))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_go_module() {
        let content = "// comment\nmodule example.com/foo\n\ngo 1.21\n";
        assert_eq!(parse_go_module(content), Some("example.com/foo".to_string()));

        let quoted = "module \"example.com/bar\" // legacy\n";
        assert_eq!(parse_go_module(quoted), Some("example.com/bar".to_string()));

        assert_eq!(parse_go_module("go 1.21\n"), None);
        assert_eq!(parse_go_module("module\n"), None);
    }

    #[test]
    fn test_extract_quoted_value() {
        assert_eq!(
            extract_quoted_value(r#"name = "my-project""#),
            Some("my-project".to_string())
        );
        assert_eq!(extract_quoted_value("no quotes here"), None);
        // Single quote mark is not a pair
        assert_eq!(extract_quoted_value(r#"only "one"#), None);
    }

    #[test]
    fn test_is_name_line() {
        assert!(is_name_line("name = \"test\""));
        assert!(is_name_line("name=\"test\""));
        assert!(!is_name_line("version = \"1.0\""));
        assert!(!is_name_line("# name = \"commented\""));
        assert!(!is_name_line("name: \"yaml style\""));
    }

    #[test]
    fn test_parse_toml_name_field() {
        let content = "[package]\nname = \"test-project\"\nversion = \"0.1.0\"\n";
        assert_eq!(parse_toml_name_field(content), Some("test-project".to_string()));

        let no_name = "[package]\nversion = \"0.1.0\"\n";
        assert_eq!(parse_toml_name_field(no_name), None);
        assert_eq!(parse_toml_name_field(""), None);
    }

    #[test]
    fn test_extract_name_from_python_content() {
        let content = "from setuptools import setup\nsetup(\n    name='my-tool',\n)\n";
        assert_eq!(
            extract_name_from_python_content(content),
            Some("my-tool".to_string())
        );

        let one_line = "setup(name=\"pkg\", version=\"1.0\")\n";
        assert_eq!(
            extract_name_from_python_content(one_line),
            Some("pkg".to_string())
        );
    }

    #[test]
    fn test_python_name_without_literal_is_skipped() {
        let content = "name = read_name()\nsetup(name=\"pkg\")\n";
        assert_eq!(
            extract_name_from_python_content(content),
            Some("pkg".to_string())
        );
    }

    #[test]
    fn test_python_dunder_name_is_not_an_assignment() {
        let content = r#"from setuptools import setup

if __name__ == "__main__":
    setup(name="pkg")
"#;
        assert_eq!(
            extract_name_from_python_content(content),
            Some("pkg".to_string())
        );

        let lookalikes = "package_name = \"other\"\nif name == \"x\":\n    pass\n";
        assert_eq!(extract_name_from_python_content(lookalikes), None);
    }

    #[test]
    fn test_extract_name_from_cfg_content() {
        let content = "[options]\nname = wrong\n[metadata]\nname = my-package\nversion = 1.0\n";
        assert_eq!(
            extract_name_from_cfg_content(content),
            Some("my-package".to_string())
        );

        assert_eq!(extract_name_from_cfg_content("[options]\nname = x\n"), None);
    }

    #[test]
    fn test_parse_cmake_project() {
        let content = "cmake_minimum_required(VERSION 3.16)\nproject(MyEngine VERSION 1.0 LANGUAGES CXX)\n";
        assert_eq!(parse_cmake_project(content), Some("MyEngine".to_string()));

        assert_eq!(parse_cmake_project("PROJECT (tiny)\n"), Some("tiny".to_string()));
        assert_eq!(parse_cmake_project("add_executable(app main.cpp)\n"), None);
        assert_eq!(parse_cmake_project("project_name = x\n"), None);
    }

    #[test]
    fn test_parse_origin_url() {
        let content = r#"[core]
	repositoryformatversion = 0
[remote "upstream"]
	url = https://github.com/upstream/thing.git
[remote "origin"]
	url = git@github.com:me/thing.git
	fetch = +refs/heads/*:refs/remotes/origin/*
[branch "main"]
	remote = origin
"#;
        assert_eq!(
            parse_origin_url(content),
            Some("git@github.com:me/thing.git".to_string())
        );

        assert_eq!(parse_origin_url("[core]\n\tbare = false\n"), None);
    }

    #[test]
    fn test_repository_name() {
        assert_eq!(
            repository_name("https://github.com/owner/repo.git"),
            Some("repo".to_string())
        );
        assert_eq!(
            repository_name("git@github.com:owner/repo.git"),
            Some("repo".to_string())
        );
        assert_eq!(repository_name("git@host:repo"), Some("repo".to_string()));
        assert_eq!(
            repository_name("https://example.com/owner/repo/"),
            Some("repo".to_string())
        );
        assert_eq!(repository_name(""), None);
    }

    #[test]
    fn test_probe_reads_marker_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("Cargo.toml"),
            "[package]\nname = \"crate-name\"\n",
        )
        .unwrap();

        assert_eq!(
            probe(Manifest::CargoToml, temp.path()),
            Some("crate-name".to_string())
        );
        assert_eq!(probe(Manifest::GoMod, temp.path()), None);
    }

    #[test]
    fn test_probe_manifest_without_name_misses() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pyproject.toml"), "[build-system]\n").unwrap();

        assert_eq!(probe(Manifest::PyprojectToml, temp.path()), None);
    }

    #[test]
    fn test_origin_url_from_git_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        fs::write(
            temp.path().join(".git/config"),
            "[remote \"origin\"]\n\turl = https://github.com/me/tool.git\n",
        )
        .unwrap();

        assert_eq!(
            origin_url(temp.path()),
            Some("https://github.com/me/tool.git".to_string())
        );
        assert_eq!(probe(Manifest::GitConfig, temp.path()), Some("tool".to_string()));
    }
}
