//! Configuration file support for persistent settings.
//!
//! This module provides support for loading configuration from a TOML file
//! located at `~/.config/codesum/config.toml` (or the platform-specific
//! equivalent). Configuration file values serve as defaults that can be
//! overridden by CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! [scanning]
//! threads = 4
//! verbose = true
//! ignore_files = [".ignore", ".gitignore"]
//! ignore = ["*.pb.go", "third_party"]
//!
//! [output]
//! format = "json"
//! contents = true
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::OutputFormat;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Scanning options
    #[serde(default)]
    pub scanning: FileScanConfig,

    /// Output options
    #[serde(default)]
    pub output: FileOutputConfig,
}

/// Scanning options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileScanConfig {
    /// Number of threads for file extraction
    pub threads: Option<usize>,

    /// Whether to show verbose output
    pub verbose: Option<bool>,

    /// Ignore files to read instead of `.ignore` and `.gitignore`
    pub ignore_files: Option<Vec<PathBuf>>,

    /// Extra ignore patterns
    pub ignore: Option<Vec<String>>,
}

/// Output options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileOutputConfig {
    /// Default report format (`"markdown"` or `"json"`)
    pub format: Option<OutputFormat>,

    /// Whether file contents are included in the report
    pub contents: Option<bool>,
}

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at `<config_dir>/codesum/config.toml`,
    /// where `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux, `%APPDATA%` on Windows).
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("codesum").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or unexpected fields
    pub fn load() -> anyhow::Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path, defaulting when it is absent.
    ///
    /// # Errors
    ///
    /// Same as [`FileConfig::load`].
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let Some(content) = crate::utils::read_optional(path)? else {
            return Ok(Self::default());
        };

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_file_config() {
        let config = FileConfig::default();

        assert!(config.scanning.threads.is_none());
        assert!(config.scanning.verbose.is_none());
        assert!(config.scanning.ignore_files.is_none());
        assert!(config.scanning.ignore.is_none());
        assert!(config.output.format.is_none());
        assert!(config.output.contents.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[scanning]
threads = 4
verbose = true
ignore_files = [".ignore", ".codesumignore"]
ignore = ["*.pb.go", "third_party"]

[output]
format = "json"
contents = false
"#;

        let config: FileConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.scanning.threads, Some(4));
        assert_eq!(config.scanning.verbose, Some(true));
        assert_eq!(
            config.scanning.ignore_files,
            Some(vec![PathBuf::from(".ignore"), PathBuf::from(".codesumignore")])
        );
        assert_eq!(
            config.scanning.ignore,
            Some(vec!["*.pb.go".to_string(), "third_party".to_string()])
        );
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert_eq!(config.output.contents, Some(false));
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
[output]
format = "markdown"
"#;

        let config: FileConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.output.format, Some(OutputFormat::Markdown));
        assert!(config.output.contents.is_none());
        assert!(config.scanning.threads.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.scanning.verbose.is_none());
    }

    #[test]
    fn test_malformed_config_errors() {
        let toml_content = r#"
[scanning]
threads = "four"
"#;
        assert!(toml::from_str::<FileConfig>(toml_content).is_err());
    }

    #[test]
    fn test_unknown_field_errors() {
        let toml_content = r#"
[scanning]
keep_days = 3
"#;
        assert!(toml::from_str::<FileConfig>(toml_content).is_err());
    }

    #[test]
    fn test_unknown_format_errors() {
        let toml_content = r#"
[output]
format = "yaml"
"#;
        assert!(toml::from_str::<FileConfig>(toml_content).is_err());
    }

    #[test]
    fn test_config_path_returns_expected_suffix() {
        if let Some(p) = FileConfig::config_path() {
            assert!(p.ends_with("codesum/config.toml"));
        }
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let temp = TempDir::new().unwrap();
        let config = FileConfig::load_from(&temp.path().join("config.toml")).unwrap();
        assert!(config.output.format.is_none());
    }

    #[test]
    fn test_load_from_invalid_toml_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[scanning\nthreads = 1").unwrap();

        let err = FileConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_expand_tilde_with_home() {
        let expanded = expand_tilde(Path::new("~/.codesumignore"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home.join(".codesumignore"));
        }
    }

    #[test]
    fn test_expand_tilde_relative_path_unchanged() {
        let expanded = expand_tilde(Path::new(".ignore"));
        assert_eq!(expanded, PathBuf::from(".ignore"));
    }
}
