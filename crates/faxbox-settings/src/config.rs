//! Configuration file handling for faxbox
//!
//! The configuration holds the dimension set and the directory the sheets are
//! written to. It is read from and written to TOML or JSON, chosen by the file
//! extension. Every field is optional in the file; missing values fall back to
//! the shipped defaults.

use std::fs;
use std::path::{Path, PathBuf};

use faxbox_core::BoxConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{SettingsError, SettingsResult};

/// Directory under the platform config dir holding `faxbox.toml`
pub const CONFIG_DIR_NAME: &str = "faxbox";
pub const CONFIG_FILE_NAME: &str = "faxbox.toml";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Format implied by the file extension
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Complete faxbox configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the generated SVG files go
    pub output_dir: PathBuf,
    /// Box dimensions
    pub dimensions: BoxConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            dimensions: BoxConfig::default(),
        }
    }
}

impl Settings {
    /// Create new settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from text in the given format
    pub fn from_str_with_format(content: &str, format: ConfigFormat) -> SettingsResult<Self> {
        let settings: Self = match format {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        if !path.exists() {
            return Err(SettingsError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings = Self::from_str_with_format(&content, format)?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Serialize settings in the given format
    pub fn to_string_with_format(&self, format: ConfigFormat) -> SettingsResult<String> {
        Ok(match format {
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
        })
    }

    /// Save settings to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let content = self.to_string_with_format(ConfigFormat::from_path(path)?)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Validate settings
    pub fn validate(&self) -> SettingsResult<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(SettingsError::EmptyOutputDir);
        }
        self.dimensions.validate()?;
        Ok(())
    }

    /// `faxbox/faxbox.toml` under the platform config directory
    pub fn default_config_path() -> PathBuf {
        let mut path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        path.push(CONFIG_DIR_NAME);
        path.push(CONFIG_FILE_NAME);
        path
    }

    /// Load `path` if given; otherwise the default config file if it exists,
    /// or the built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        let default_path = Self::default_config_path();
        if default_path.exists() {
            Self::load_from_file(&default_path)
        } else {
            debug!("No config file at {}, using defaults", default_path.display());
            Ok(Self::default())
        }
    }
}
