//! XDG path helpers for settings and the store file.

use crate::error::ProjectorError;
use std::path::PathBuf;

pub const APP_DIR: &str = "projector";
pub const STORE_FILE: &str = "projector.json";
pub const SETTINGS_FILE: &str = "config.toml";

/// Base configuration directory.
///
/// `$XDG_CONFIG_HOME`, then `$HOME/.config`, then the platform default.
pub fn config_home() -> Result<PathBuf, ProjectorError> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(xdg));
    }
    if let Some(home) = std::env::var_os("HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home).join(".config"));
    }
    directories::BaseDirs::new()
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            ProjectorError::ConfigError("unable to determine config location".to_string())
        })
}

/// Default store file: `<config_home>/projector/projector.json`.
pub fn default_store_path() -> Result<PathBuf, ProjectorError> {
    Ok(config_home()?.join(APP_DIR).join(STORE_FILE))
}

/// Global settings file: `<config_home>/projector/config.toml`.
pub fn global_settings_path() -> Result<PathBuf, ProjectorError> {
    Ok(config_home()?.join(APP_DIR).join(SETTINGS_FILE))
}
