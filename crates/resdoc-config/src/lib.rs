//! Configuration management for resdoc.
//!
//! Parses `resdoc.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Every setting has a
//! default, so running without a config file is fine.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String values support `${VAR}` and `${VAR:-default}`:
//!
//! - `output.dir`
//! - `man.manual_name`, `man.command_name`, `man.date`
//! - `markdown.layout`, `markdown.section_name`, `markdown.sidebar_current`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the base output directory.
    pub output_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "resdoc.toml";

/// Highest man page section accepted.
const MAX_MAN_SECTION: u8 = 9;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration (directory as a relative string from TOML).
    output: OutputConfigRaw,
    /// Man page settings.
    pub man: ManConfig,
    /// Markdown page settings.
    pub markdown: MarkdownConfig,

    /// Resolved base output directory (set after loading).
    #[serde(skip)]
    pub output_dir: PathBuf,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw output configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    dir: Option<String>,
}

/// Man page settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ManConfig {
    /// Subdirectory of the output directory for man pages.
    pub dir: String,
    /// Manual name in the page header.
    pub manual_name: String,
    /// Command name in the `.TH` line.
    pub command_name: String,
    /// Date in the page footer.
    pub date: String,
    /// Manual section number (1-9).
    pub section: u8,
}

impl Default for ManConfig {
    fn default() -> Self {
        Self {
            dir: "man".to_owned(),
            manual_name: "Terraform Manual".to_owned(),
            command_name: "TERRAFORM".to_owned(),
            date: "Feb 11, 2016".to_owned(),
            section: 1,
        }
    }
}

/// Markdown page settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Subdirectory of the output directory for Markdown pages.
    pub dir: String,
    /// Site layout name in front matter.
    pub layout: String,
    /// Section name prefixed to page titles.
    pub section_name: String,
    /// Sidebar entry to highlight.
    pub sidebar_current: String,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            dir: "markdown".to_owned(),
            layout: "triton".to_owned(),
            section_name: "Triton".to_owned(),
            sidebar_current: "docs-triton-firewall".to_owned(),
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
        /// Config field path (e.g., "`man.date`").
        field: String,
        /// Error message (e.g., "${`RELEASE_DATE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a subdirectory name to stay below the output directory.
fn require_subdir(value: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(value, field)?;
    let path = Path::new(value);
    if path.is_absolute() || path.components().any(|c| c.as_os_str() == "..") {
        return Err(ConfigError::Validation(format!(
            "{field} must be a relative path inside the output directory"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `resdoc.toml` in current directory and parents,
    /// falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// a value is invalid.
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

    /// Directory for generated man pages.
    #[must_use]
    pub fn man_dir(&self) -> PathBuf {
        self.output_dir.join(&self.man.dir)
    }

    /// Directory for generated Markdown pages.
    #[must_use]
    pub fn markdown_dir(&self) -> PathBuf {
        self.output_dir.join(&self.markdown.dir)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(output_dir) = &settings.output_dir {
            self.output_dir.clone_from(output_dir);
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
            output: OutputConfigRaw::default(),
            man: ManConfig::default(),
            markdown: MarkdownConfig::default(),
            output_dir: base.join("output"),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

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
        self.validate_man()?;
        self.validate_markdown()?;
        Ok(())
    }

    fn validate_man(&self) -> Result<(), ConfigError> {
        require_subdir(&self.man.dir, "man.dir")?;
        require_non_empty(&self.man.manual_name, "man.manual_name")?;
        require_non_empty(&self.man.command_name, "man.command_name")?;
        if !(1..=MAX_MAN_SECTION).contains(&self.man.section) {
            return Err(ConfigError::Validation(format!(
                "man.section must be between 1 and {MAX_MAN_SECTION}"
            )));
        }
        Ok(())
    }

    fn validate_markdown(&self) -> Result<(), ConfigError> {
        require_subdir(&self.markdown.dir, "markdown.dir")?;
        require_non_empty(&self.markdown.layout, "markdown.layout")?;
        require_non_empty(&self.markdown.section_name, "markdown.section_name")?;
        require_non_empty(&self.markdown.sidebar_current, "markdown.sidebar_current")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref mut dir) = self.output.dir {
            expand::expand_in_place(dir, "output.dir")?;
        }

        expand::expand_in_place(&mut self.man.manual_name, "man.manual_name")?;
        expand::expand_in_place(&mut self.man.command_name, "man.command_name")?;
        expand::expand_in_place(&mut self.man.date, "man.date")?;

        expand::expand_in_place(&mut self.markdown.layout, "markdown.layout")?;
        expand::expand_in_place(&mut self.markdown.section_name, "markdown.section_name")?;
        expand::expand_in_place(
            &mut self.markdown.sidebar_current,
            "markdown.sidebar_current",
        )?;

        Ok(())
    }

    /// Resolve the output directory relative to the config file's directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.output_dir = config_dir.join(self.output.dir.as_deref().unwrap_or("output"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.output_dir, PathBuf::from("/test/output"));
        assert_eq!(config.man_dir(), PathBuf::from("/test/output/man"));
        assert_eq!(config.markdown_dir(), PathBuf::from("/test/output/markdown"));
        assert_eq!(config.man.manual_name, "Terraform Manual");
        assert_eq!(config.man.command_name, "TERRAFORM");
        assert_eq!(config.man.section, 1);
        assert_eq!(config.markdown.layout, "triton");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.man.date, "Feb 11, 2016");
        assert_eq!(config.markdown.sidebar_current, "docs-triton-firewall");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[output]
dir = "build/docs"

[man]
dir = "man5"
manual_name = "Cloud Manual"
command_name = "CLOUD"
date = "Jan 1, 2025"
section = 5

[markdown]
dir = "site"
layout = "cloud"
section_name = "Cloud"
sidebar_current = "docs-cloud"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.output_dir, PathBuf::from("/project/build/docs"));
        assert_eq!(config.man_dir(), PathBuf::from("/project/build/docs/man5"));
        assert_eq!(config.markdown_dir(), PathBuf::from("/project/build/docs/site"));
        assert_eq!(config.man.manual_name, "Cloud Manual");
        assert_eq!(config.man.command_name, "CLOUD");
        assert_eq!(config.man.section, 5);
        assert_eq!(config.markdown.layout, "cloud");
        assert_eq!(config.markdown.section_name, "Cloud");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let toml = r#"
[man]
section = 7
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.man.section, 7);
        assert_eq!(config.man.manual_name, "Terraform Manual");
        assert_eq!(config.man.dir, "man");
    }

    #[test]
    fn test_section_out_of_range() {
        for section in [0, 10] {
            let config = Config {
                man: ManConfig {
                    section,
                    ..ManConfig::default()
                },
                ..Config::default_with_base(Path::new("/test"))
            };
            let err = config.validate().unwrap_err();
            assert!(
                matches!(err, ConfigError::Validation(ref msg) if msg.contains("man.section")),
                "Expected section validation error, got {err:?}"
            );
        }
    }

    #[test]
    fn test_empty_values_rejected() {
        let config = Config {
            markdown: MarkdownConfig {
                layout: "  ".to_owned(),
                ..MarkdownConfig::default()
            },
            ..Config::default_with_base(Path::new("/test"))
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("markdown.layout"));
    }

    #[test]
    fn test_subdir_must_stay_inside_output() {
        let config = Config {
            man: ManConfig {
                dir: "../man".to_owned(),
                ..ManConfig::default()
            },
            ..Config::default_with_base(Path::new("/test"))
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("man.dir"));
    }

    #[test]
    fn test_cli_settings_override() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.apply_cli_settings(&CliSettings {
            output_dir: Some(PathBuf::from("/elsewhere")),
        });
        assert_eq!(config.output_dir, PathBuf::from("/elsewhere"));
        assert_eq!(config.man_dir(), PathBuf::from("/elsewhere/man"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"
[output]
dir = "generated"

[markdown]
layout = "${RESDOC_TEST_LOAD_LAYOUT:-fallback}"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.output_dir, dir.path().join("generated"));
        assert_eq!(config.markdown.layout, "fallback");
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/resdoc.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[man\nsection = 1").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let result: Result<Config, _> = toml::from_str("[man]\nsection = \"one\"");
        assert!(result.is_err());
    }
}
