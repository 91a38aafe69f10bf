//! Configuration System
//!
//! Settings for the tool itself (where the store file lives, how to log),
//! layered from defaults, the global settings file, an explicit settings file,
//! and `PROJECTOR_*` environment variables. The scoped key/value data is not
//! configuration; it lives in the store file.

use crate::error::ProjectorError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod merge;
pub mod paths;
mod sources;

pub use paths::{config_home, default_store_path, global_settings_path};

/// Root settings structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectorConfig {
    /// Store file location (defaults to `<config_home>/projector/projector.json`)
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ProjectorConfig {
    /// Store file to use: explicit override, then settings, then the XDG default.
    pub fn resolve_store_path(&self, explicit: Option<&Path>) -> Result<PathBuf, ProjectorError> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.store_path {
            if path.as_os_str().is_empty() {
                return Err(ProjectorError::ConfigError(
                    "store_path cannot be empty".to_string(),
                ));
            }
            return Ok(path.clone());
        }
        default_store_path()
    }
}

/// Loads [`ProjectorConfig`] through the merge policy.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from defaults, the global settings file, and the environment.
    pub fn load() -> Result<ProjectorConfig, ProjectorError> {
        Self::load_layers(None)
    }

    /// Like [`ConfigLoader::load`], with `path` layered above the global file.
    pub fn load_from_file(path: &Path) -> Result<ProjectorConfig, ProjectorError> {
        Self::load_layers(Some(path))
    }

    fn load_layers(explicit: Option<&Path>) -> Result<ProjectorConfig, ProjectorError> {
        let mut builder = merge::merge_policy::builder_with_defaults()?;
        builder = sources::global_file::add_to_builder(builder);
        if let Some(path) = explicit {
            builder = sources::explicit_file::add_to_builder(builder, path);
        }
        builder = sources::environment::add_to_builder(builder);

        let config: ProjectorConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }
}
