//! Configuration management for doctree.
//!
//! Parses `doctree.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `docs.source_dir`
//! - `toc.selected_class`

mod expand;

use glob::Pattern;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "doctree.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Table of contents configuration.
    pub toc: TocConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    ignore: Option<Vec<String>>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory walked into the tree.
    pub source_dir: PathBuf,
    /// Base-name glob patterns skipped during the walk.
    pub ignore: Vec<String>,
}

impl DocsConfig {
    /// Compile the ignore patterns.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first invalid pattern.
    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>, ConfigError> {
        self.ignore
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|e| {
                    ConfigError::Validation(format!("docs.ignore pattern {p:?} is invalid: {e}"))
                })
            })
            .collect()
    }
}

/// Table of contents configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TocConfig {
    /// CSS class marking the selected page and folder.
    pub selected_class: String,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            selected_class: "selected".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`docs.source_dir`").
        field: String,
        /// Error message (e.g., "${`DOCS_DIR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a string field to be usable inside an HTML attribute.
fn require_class_name(value: &str, field: &str) -> Result<(), ConfigError> {
    if value
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '&'))
    {
        return Err(ConfigError::Validation(format!(
            "{field} must be a single class name"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `doctree.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            docs: DocsConfigRaw::default(),
            toc: TocConfig::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
                ignore: Vec::new(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.toc.selected_class, "toc.selected_class")?;
        require_class_name(&self.toc.selected_class, "toc.selected_class")?;
        self.docs_resolved.ignore_patterns()?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref dir) = self.docs.source_dir {
            self.docs.source_dir = Some(expand::expand_env(dir, "docs.source_dir")?);
        }
        self.toc.selected_class =
            expand::expand_env(&self.toc.selected_class, "toc.selected_class")?;
        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.docs_resolved = DocsConfig {
            source_dir: config_dir.join(self.docs.source_dir.as_deref().unwrap_or("docs")),
            ignore: self.docs.ignore.clone().unwrap_or_default(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs"));
        assert!(config.docs_resolved.ignore.is_empty());
        assert_eq!(config.toc.selected_class, "selected");
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.toc.selected_class, "selected");
    }

    #[test]
    fn test_parse_toc_config() {
        let toml = r#"
[toc]
selected_class = "current"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.toc.selected_class, "current");
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[docs]
source_dir = "documentation"
ignore = [".*", "_*"]
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/project/documentation")
        );
        assert_eq!(
            config.docs_resolved.ignore,
            vec![".*".to_owned(), "_*".to_owned()]
        );
    }

    #[test]
    fn test_resolve_paths_defaults_to_docs() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/project/docs")
        );
    }

    #[test]
    fn test_ignore_patterns_compile() {
        let docs = DocsConfig {
            source_dir: PathBuf::from("/docs"),
            ignore: vec![".*".to_owned(), "*.tmp".to_owned()],
        };

        let patterns = docs.ignore_patterns().unwrap();

        assert_eq!(patterns.len(), 2);
        assert!(patterns[0].matches(".git"));
        assert!(patterns[1].matches("scratch.tmp"));
    }

    #[test]
    fn test_invalid_ignore_pattern_rejected() {
        let docs = DocsConfig {
            source_dir: PathBuf::from("/docs"),
            ignore: vec!["[".to_owned()],
        };

        let err = docs.ignore_patterns().unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("docs.ignore"));
    }

    #[test]
    fn test_validate_rejects_empty_selected_class() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.toc.selected_class = String::new();

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("toc.selected_class cannot be empty"));
    }

    #[test]
    fn test_validate_rejects_multiple_classes() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.toc.selected_class = "active current".to_owned();

        let err = config.validate().unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_apply_cli_settings_source_dir() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            source_dir: Some(PathBuf::from("/custom/docs")),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/custom/docs")
        );
    }

    #[test]
    fn test_apply_cli_settings_none_keeps_config() {
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs"));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let result = Config::load(Some(Path::new("/nonexistent/doctree.toml")), None);

        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_from_file_resolves_relative_to_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("doctree.toml");
        std::fs::write(
            &config_path,
            r#"
[docs]
source_dir = "${DOCTREE_TEST_UNSET_DIR:-site}"
ignore = [".*"]

[toc]
selected_class = "active"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&config_path), None).unwrap();

        assert_eq!(config.docs_resolved.source_dir, temp_dir.path().join("site"));
        assert_eq!(config.docs_resolved.ignore, vec![".*".to_owned()]);
        assert_eq!(config.toc.selected_class, "active");
        assert_eq!(config.config_path, Some(config_path));
    }

    #[test]
    fn test_load_cli_settings_override_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("doctree.toml");
        std::fs::write(&config_path, "[docs]\nsource_dir = \"site\"\n").unwrap();
        let overrides = CliSettings {
            source_dir: Some(PathBuf::from("/override")),
        };

        let config = Config::load(Some(&config_path), Some(&overrides)).unwrap();

        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/override"));
    }

    #[test]
    fn test_load_invalid_toml_is_parse_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("doctree.toml");
        std::fs::write(&config_path, "[docs\n").unwrap();

        let result = Config::load(Some(&config_path), None);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_invalid_ignore_pattern_fails_validation() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("doctree.toml");
        std::fs::write(&config_path, "[docs]\nignore = [\"[\"]\n").unwrap();

        let result = Config::load(Some(&config_path), None);

        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
