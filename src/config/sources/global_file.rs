//! Global settings file source: $XDG_CONFIG_HOME/projector/config.toml

use crate::config::paths::global_settings_path;
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::File;
use config::FileFormat;

/// Add the global settings file to the builder if it exists.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    let Ok(path) = global_settings_path() else {
        return builder;
    };
    if !path.exists() {
        return builder;
    }
    builder.add_source(File::from(path).format(FileFormat::Toml).required(false))
}
