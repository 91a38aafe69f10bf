//! CLI parse: clap types for projector. No behavior; definitions only.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Projector - directory-scoped key/value settings
#[derive(Parser, Debug)]
#[command(name = "projector")]
#[command(about = "Directory-scoped key/value settings, resolved from the current path up to /")]
pub struct Cli {
    /// Nothing prints every scope, `<key>` prints one resolved value,
    /// `add <key> <value>` sets at the current location, `rm <key>` removes from it
    pub args: Vec<String>,

    /// Store file path (overrides settings and the XDG default)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Current location (defaults to the working directory)
    #[arg(short, long)]
    pub pwd: Option<PathBuf>,

    /// Print the values visible from the current location instead of every scope
    #[arg(long)]
    pub merged: bool,

    /// Output format when printing more than one value
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Settings file for the tool itself (TOML, JSON, or YAML)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
