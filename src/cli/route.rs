//! CLI route: run context and the single dispatch over operations.

use crate::cli::operation::Operation;
use crate::cli::parse::{Cli, OutputFormat};
use crate::cli::presentation::{
    format_entries_json, format_entries_text, format_scopes_json, format_scopes_text,
};
use crate::config::ProjectorConfig;
use crate::error::ProjectorError;
use crate::scope::path::working_directory;
use crate::scope::Scope;
use crate::store::{JsonFileRepository, PathScopedStore};
use std::path::{Path, PathBuf};
use tracing::{debug, info_span};

/// How print-all output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    pub merged: bool,
    pub format: OutputFormat,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            merged: false,
            format: OutputFormat::Json,
        }
    }
}

/// Runtime context for one invocation: the store bound to the current
/// location and the file it was loaded from.
pub struct RunContext {
    store: PathScopedStore,
    repository: JsonFileRepository,
    print: PrintOptions,
}

impl RunContext {
    /// Resolve the current location, then load the store file.
    pub fn new(
        pwd: Option<&Path>,
        store_path: PathBuf,
        print: PrintOptions,
    ) -> Result<Self, ProjectorError> {
        let current = resolve_location(pwd)?;
        let repository = JsonFileRepository::new(store_path);
        let store = PathScopedStore::open(&repository, current)?;
        debug!(
            store_path = %repository.path().display(),
            current = %store.current(),
            "Run context initialized"
        );
        Ok(Self {
            store,
            repository,
            print,
        })
    }

    /// Build from parsed CLI flags and loaded settings.
    pub fn from_cli(cli: &Cli, config: &ProjectorConfig) -> Result<Self, ProjectorError> {
        let store_path = config.resolve_store_path(cli.config.as_deref())?;
        let print = PrintOptions {
            merged: cli.merged,
            format: cli.format,
        };
        Self::new(cli.pwd.as_deref(), store_path, print)
    }

    pub fn store(&self) -> &PathScopedStore {
        &self.store
    }

    pub fn store_path(&self) -> &Path {
        self.repository.path()
    }

    /// Execute one operation; `Some` holds text for stdout.
    ///
    /// Mutations are saved before returning when they changed the store.
    pub fn execute(&mut self, operation: &Operation) -> Result<Option<String>, ProjectorError> {
        let span = info_span!("operation", name = operation.name(), scope = %self.store.current());
        let _enter = span.enter();

        match operation {
            Operation::Print(Some(key)) => Ok(self.store.get_value(key).map(str::to_string)),
            Operation::Print(None) => self.print_all().map(Some),
            Operation::Add(key, value) => {
                self.store.set_value(key, value);
                self.save_if_dirty()?;
                Ok(None)
            }
            Operation::Remove(key) => {
                self.store.remove_value(key);
                self.save_if_dirty()?;
                Ok(None)
            }
        }
    }

    fn print_all(&self) -> Result<String, ProjectorError> {
        match (self.print.merged, self.print.format) {
            (false, OutputFormat::Json) => format_scopes_json(self.store.get_value_all()),
            (false, OutputFormat::Text) => Ok(format_scopes_text(self.store.get_value_all())),
            (true, OutputFormat::Json) => format_entries_json(&self.store.get_value_merged()),
            (true, OutputFormat::Text) => Ok(format_entries_text(&self.store.get_value_merged())),
        }
    }

    fn save_if_dirty(&mut self) -> Result<(), ProjectorError> {
        if !self.store.is_dirty() {
            debug!("Store unchanged, nothing to save");
            return Ok(());
        }
        self.store.save(&self.repository)?;
        Ok(())
    }
}

/// The current location: `--pwd` when given, otherwise the working directory.
///
/// Treated as an opaque path; nothing on disk is consulted beyond reading
/// the process working directory.
pub fn resolve_location(pwd: Option<&Path>) -> Result<Scope, ProjectorError> {
    match pwd {
        Some(path) => Ok(Scope::from_path(path)?),
        None => {
            let cwd = working_directory().map_err(|e| {
                ProjectorError::ConfigError(format!("error getting current_dir: {}", e))
            })?;
            Ok(Scope::from_path(&cwd)?)
        }
    }
}
