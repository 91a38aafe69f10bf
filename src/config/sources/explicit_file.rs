//! Explicit settings file source (`--settings <file>`); required when given.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::File;
use std::path::Path;

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> ConfigBuilder<DefaultState> {
    builder.add_source(File::from(path).required(true))
}
