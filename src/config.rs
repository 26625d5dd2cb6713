//! Configuration management for skillbook
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.skillbook/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{GuideError, Result};

const VERBOSITY_LEVELS: [&str; 4] = ["quiet", "normal", "verbose", "very_verbose"];

/// Complete configuration for skillbook
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub selector: SelectorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where guidance documents come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Extra documents directory; `~/` is expanded
    pub docs_dir: Option<String>,
    /// Load the documents bundled with the binary
    pub include_builtin: bool,
}

/// Selector behaviour
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Maximum documents per lookup, 0 = unlimited
    pub default_limit: usize,
}

/// Terminal output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub default_verbosity: String,
    pub color_output: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            docs_dir: None,
            include_builtin: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_verbosity: "normal".to_string(),
            color_output: true,
        }
    }
}

impl StoreConfig {
    /// Expanded documents directory, if one is configured
    pub fn docs_path(&self) -> Option<PathBuf> {
        self.docs_dir
            .as_deref()
            .filter(|dir| !dir.trim().is_empty())
            .map(Config::expand_path)
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| GuideError::Config(format!("Failed to read config {}: {}", path.display(), e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| GuideError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Standard configuration file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".skillbook").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.store.docs_dir {
            if dir.trim().is_empty() {
                return Err(GuideError::Config(
                    "docs_dir must not be empty when set".to_string(),
                ));
            }
        }

        if !VERBOSITY_LEVELS.contains(&self.output.default_verbosity.as_str()) {
            return Err(GuideError::Config(format!(
                "Invalid verbosity level: {}",
                self.output.default_verbosity
            )));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = self.to_toml()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| GuideError::Config(format!("Failed to create config dir: {}", e)))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| GuideError::Config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Render as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| GuideError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Expand tilde in paths
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }
}
