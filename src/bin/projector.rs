//! Projector CLI Binary
//!
//! Command-line interface for directory-scoped key/value settings.

use clap::Parser;
use projector::cli::{map_error, Cli, Operation, RunContext};
use projector::config::{ConfigLoader, ProjectorConfig};
use projector::error::ProjectorError;
use projector::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::debug;

fn main() {
    let cli = Cli::parse();

    let settings = load_settings(&cli);
    let logging_config = build_logging_config(&cli, settings.as_ref().ok());

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => fail(&e),
    };

    let operation = match Operation::try_from(cli.args.clone()) {
        Ok(op) => op,
        Err(e) => fail(&e),
    };

    let mut context = match RunContext::from_cli(&cli, &settings) {
        Ok(ctx) => ctx,
        Err(e) => fail(&e),
    };

    match context.execute(&operation) {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => debug!(operation = operation.name(), "Nothing to print"),
        Err(e) => fail(&e),
    }
}

fn load_settings(cli: &Cli) -> Result<ProjectorConfig, ProjectorError> {
    match cli.settings {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

fn fail(e: &ProjectorError) -> ! {
    debug!("Command failed: {}", e);
    eprintln!("{}", map_error(e));
    process::exit(1);
}

/// Build logging configuration from CLI flags and settings.
/// Precedence: CLI flags override settings override defaults.
fn build_logging_config(cli: &Cli, settings: Option<&ProjectorConfig>) -> LoggingConfig {
    let mut config = settings.map(|s| s.logging.clone()).unwrap_or_default();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
