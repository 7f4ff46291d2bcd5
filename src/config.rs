//! Configuration management for Talks Catalog
//!
//! Handles loading, saving, and locating application configuration.
//! Configuration is persisted as JSON under the platform config directory.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier, used as the config directory name
pub const APP_ID: &str = "talks-catalog";

/// Well-known relative location of the talk data
pub const DEFAULT_DATA_SOURCE: &str = "data/talks.json";

/// Page the list view links to, carrying the talk id in `?id=`
pub const DEFAULT_DETAIL_PAGE: &str = "talk-detail.html";

/// Page the detail view links back to
pub const DEFAULT_LIST_PAGE: &str = "index.html";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Data source configuration
    pub data: DataConfig,

    /// Rendered site configuration
    pub site: SiteConfig,
}

/// Where the talk collection comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// File path or `http(s)://` URL of the talks JSON document
    pub source: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_DATA_SOURCE.to_string(),
        }
    }
}

/// Rendered page configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Name shown in the page subtitle
    pub author: String,

    /// Detail page link target
    pub detail_page: String,

    /// List page link target
    pub list_page: String,

    /// Embed the built-in stylesheet in rendered pages
    pub inline_styles: bool,

    /// Extra CSS appended after the built-in styles
    pub custom_css: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            author: "Eduardo Ferro".to_string(),
            detail_page: DEFAULT_DETAIL_PAGE.to_string(),
            list_page: DEFAULT_LIST_PAGE.to_string(),
            inline_styles: true,
            custom_css: None,
        }
    }
}

impl Config {
    /// Load configuration from the config directory or return defaults
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from `path`, defaults when it does not exist
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::LoadError(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save configuration to the config directory, returning the file written
    pub fn save(&self) -> ConfigResult<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, content).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        log::debug!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Get the configuration directory path
    pub fn config_dir() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_ID))
            .ok_or(ConfigError::DirectoryError)
    }

    /// Location of `config.json`
    pub fn config_file_path() -> ConfigResult<PathBuf> {
        Self::config_dir().map(|p| p.join("config.json"))
    }
}
