//! Configuration loading and persistence for faxbox
//!
//! Reads the dimension set and output directory from a TOML or JSON file,
//! falling back to built-in defaults.

pub mod config;
pub mod error;

pub use config::{
    ConfigFormat, Settings, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_OUTPUT_DIR,
};
pub use error::{SettingsError, SettingsResult};
