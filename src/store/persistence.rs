//! Store persistence: the on-disk JSON document and repository implementations.

use crate::error::StorageError;
use crate::store::ScopeMap;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Loads and saves the full scope map for a session.
pub trait ScopeRepository {
    fn load(&self) -> Result<ScopeMap, StorageError>;
    fn save(&self, scopes: &ScopeMap) -> Result<(), StorageError>;
}

/// Persisted document: `{"projector": {"/scope": {"key": "value"}}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub projector: ScopeMap,
}

/// JSON file repository
///
/// A missing or blank file loads as an empty store. Saves write a temporary
/// sibling file and rename it over the target.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "projector.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ScopeRepository for JsonFileRepository {
    fn load(&self) -> Result<ScopeMap, StorageError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Store file not found, starting empty");
            return Ok(ScopeMap::new());
        }

        let contents =
            fs::read_to_string(&self.path).map_err(|e| StorageError::io(&self.path, e))?;
        if contents.trim().is_empty() {
            return Ok(ScopeMap::new());
        }

        let document: StoreDocument =
            serde_json::from_str(&contents).map_err(|e| StorageError::Malformed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        Ok(document.projector)
    }

    fn save(&self, scopes: &ScopeMap) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
            }
        }

        let document = StoreDocument {
            projector: scopes.clone(),
        };
        let serialized = serde_json::to_string_pretty(&document)?;

        let temp_path = self.temp_path();
        fs::write(&temp_path, serialized).map_err(|e| StorageError::io(&temp_path, e))?;
        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::io(&self.path, e)
        })?;

        info!(path = %self.path.display(), scopes = scopes.len(), "Saved store");
        Ok(())
    }
}

/// In-memory repository for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    scopes: RefCell<ScopeMap>,
}

impl MemoryRepository {
    pub fn new(scopes: ScopeMap) -> Self {
        Self {
            scopes: RefCell::new(scopes),
        }
    }

    pub fn snapshot(&self) -> ScopeMap {
        self.scopes.borrow().clone()
    }
}

impl ScopeRepository for MemoryRepository {
    fn load(&self) -> Result<ScopeMap, StorageError> {
        Ok(self.snapshot())
    }

    fn save(&self, scopes: &ScopeMap) -> Result<(), StorageError> {
        *self.scopes.borrow_mut() = scopes.clone();
        Ok(())
    }
}
