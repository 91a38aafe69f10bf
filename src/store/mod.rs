//! Path-Scoped Store
//!
//! Holds per-scope key/value maps and resolves keys for a fixed current
//! location by walking from that location up to the root. Mutations always
//! apply at the current location's own scope.

pub mod persistence;

pub use persistence::{JsonFileRepository, MemoryRepository, ScopeRepository, StoreDocument};

use crate::error::StorageError;
use crate::scope::Scope;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Key/value pairs defined directly at one scope.
pub type ScopeEntries = BTreeMap<String, String>;

/// Every scope with its own entries, unmerged.
pub type ScopeMap = BTreeMap<Scope, ScopeEntries>;

/// Whether the in-memory store differs from what was loaded or last saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    Clean,
    Dirty,
}

/// Scoped settings for one invocation, bound to a current location.
#[derive(Debug, Clone)]
pub struct PathScopedStore {
    current: Scope,
    scopes: ScopeMap,
    state: StoreState,
}

impl PathScopedStore {
    pub fn new(current: Scope, scopes: ScopeMap) -> Self {
        Self {
            current,
            scopes,
            state: StoreState::Clean,
        }
    }

    /// Load scopes from a repository and bind them to `current`.
    pub fn open(repository: &dyn ScopeRepository, current: Scope) -> Result<Self, StorageError> {
        let scopes = repository.load()?;
        debug!(scopes = scopes.len(), current = %current, "Loaded scoped store");
        Ok(Self::new(current, scopes))
    }

    pub fn current(&self) -> &Scope {
        &self.current
    }

    pub fn state(&self) -> StoreState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state == StoreState::Dirty
    }

    /// Resolve `key` from the nearest scope that defines it.
    pub fn get_value(&self, key: &str) -> Option<&str> {
        for prefix in self.current.prefixes() {
            if let Some(value) = self.scopes.get(prefix).and_then(|entries| entries.get(key)) {
                debug!(key, depth = prefix.len(), "Resolved key");
                return Some(value.as_str());
            }
        }
        None
    }

    /// The whole store as loaded and mutated, without any merging.
    pub fn get_value_all(&self) -> &ScopeMap {
        &self.scopes
    }

    /// Every key visible from the current location with its resolved value.
    pub fn get_value_merged(&self) -> ScopeEntries {
        let mut merged = ScopeEntries::new();
        let prefixes: Vec<&[String]> = self.current.prefixes().collect();
        for prefix in prefixes.into_iter().rev() {
            if let Some(entries) = self.scopes.get(prefix) {
                merged.extend(entries.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }
        merged
    }

    /// Set `key` at the current location, shadowing any ancestor value.
    pub fn set_value(&mut self, key: &str, value: &str) {
        self.scopes
            .entry(self.current.clone())
            .or_default()
            .insert(key.to_string(), value.to_string());
        self.state = StoreState::Dirty;
        info!(key, scope = %self.current, "Set value");
    }

    /// Remove `key` from the current location's own scope.
    ///
    /// Ancestors are never touched, so a shadowed ancestor value becomes
    /// visible again. Returns whether an entry was removed; removing an absent
    /// key is a no-op. A scope left without entries is pruned.
    pub fn remove_value(&mut self, key: &str) -> bool {
        let Some(entries) = self.scopes.get_mut(&self.current) else {
            return false;
        };
        if entries.remove(key).is_none() {
            return false;
        }
        if entries.is_empty() {
            self.scopes.remove(&self.current);
        }
        self.state = StoreState::Dirty;
        info!(key, scope = %self.current, "Removed value");
        true
    }

    /// Persist all scopes and mark the store clean.
    pub fn save(&mut self, repository: &dyn ScopeRepository) -> Result<(), StorageError> {
        repository.save(&self.scopes)?;
        self.state = StoreState::Clean;
        Ok(())
    }

    pub fn into_scopes(self) -> ScopeMap {
        self.scopes
    }
}
