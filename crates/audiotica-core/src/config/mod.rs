//! # Audiotica Settings
//!
//! User settings and the file formats they can be stored in. The format is
//! picked from the file extension; JSON is always available, TOML and YAML
//! depend on the `toml-config` and `yaml-config` features.
pub mod error;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::services::navigation::PageKey;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yaml, .yml) - requires "yaml-config" feature
    #[cfg(feature = "yaml-config")]
    Yaml,
    /// TOML format (.toml) - requires "toml-config" feature
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ConfigFormat {
    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => "toml",
        }
    }

    /// Determine format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                #[cfg(feature = "yaml-config")]
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                #[cfg(feature = "toml-config")]
                "toml" => Some(ConfigFormat::Toml),
                _ => None,
            })
    }
}

/// Color theme requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Page shown on a fresh launch
    pub initial_page: PageKey,
    /// Log filter used when neither the CLI nor RUST_LOG set one
    pub log_level: String,
    pub theme: Theme,
    /// Number of albums on the explore page
    pub explore_album_count: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            initial_page: PageKey::Explore,
            log_level: "info".to_string(),
            theme: Theme::System,
            explore_album_count: 10,
        }
    }
}

impl AppSettings {
    /// Parse settings from a string in the given format.
    pub fn parse(contents: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let settings: AppSettings = match format {
            ConfigFormat::Json => serde_json::from_str(contents).map_err(|e| {
                ConfigError::Deserialization { format: "JSON".to_string(), message: e.to_string() }
            })?,
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| {
                ConfigError::Deserialization { format: "YAML".to_string(), message: e.to_string() }
            })?,
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::from_str(contents).map_err(|e| {
                ConfigError::Deserialization { format: "TOML".to_string(), message: e.to_string() }
            })?,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings to a string in the given format.
    pub fn serialize(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self).map_err(|e| {
                ConfigError::Serialization { format: "JSON".to_string(), message: e.to_string() }
            }),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::to_string(self).map_err(|e| {
                ConfigError::Serialization { format: "YAML".to_string(), message: e.to_string() }
            }),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::to_string_pretty(self).map_err(|e| {
                ConfigError::Serialization { format: "TOML".to_string(), message: e.to_string() }
            }),
        }
    }

    /// Load settings from a file, choosing the format by extension.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat { path: path.to_path_buf() })?;
        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::io(e, "read_settings", path.to_path_buf()))?;
        log::debug!("Loading settings from {}", path.display());
        Self::parse(&contents, format)
    }

    /// Write settings to a file, choosing the format by extension.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat { path: path.to_path_buf() })?;
        let contents = self.serialize(format)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::io(e, "create_settings_dir", parent.to_path_buf()))?;
        }
        fs::write(path, contents).map_err(|e| ConfigError::io(e, "write_settings", path.to_path_buf()))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.explore_album_count == 0 {
            return Err(ConfigError::InvalidValue {
                key: "explore_album_count".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "log_level".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
