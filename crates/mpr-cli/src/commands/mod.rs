//! Subcommand implementations.

pub mod batch;
pub mod config;
pub mod parse;
pub mod reports;

use std::path::{Path, PathBuf};

use mpr_core::MprConfig;

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mpr")
        .join("config.json")
}

/// Load the explicit config file, else the default one if present, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<MprConfig> {
    if let Some(path) = config_path {
        return Ok(MprConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        Ok(MprConfig::from_file(&default_path)?)
    } else {
        Ok(MprConfig::default())
    }
}
