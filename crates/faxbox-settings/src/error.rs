//! Error types for the settings crate.
//!
//! This module provides structured error types for loading, saving and
//! validating the configuration file.

use std::io;
use std::path::PathBuf;

use faxbox_core::DimensionError;
use thiserror::Error;

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The configuration file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file extension is neither `.toml` nor `.json`.
    #[error("Unsupported config format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),

    /// A configuration value is invalid.
    #[error("Invalid setting: {0}")]
    InvalidSetting(#[from] DimensionError),

    /// The output directory setting is empty.
    #[error("Output directory must not be empty")]
    EmptyOutputDir,

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_error_display() {
        let err = SettingsError::UnsupportedFormat("yaml".to_string());
        assert_eq!(
            err.to_string(),
            "Unsupported config format: yaml (expected .toml or .json)"
        );

        let err = SettingsError::NotFound(PathBuf::from("missing.toml"));
        assert_eq!(err.to_string(), "Configuration file not found: missing.toml");
    }

    #[test]
    fn test_dimension_error_conversion() {
        let dim = DimensionError::NonPositive {
            name: "kerf".to_string(),
            value: 0.0,
        };
        let err: SettingsError = dim.into();
        assert!(matches!(err, SettingsError::InvalidSetting(_)));
        assert!(err.to_string().starts_with("Invalid setting: "));
    }
}
