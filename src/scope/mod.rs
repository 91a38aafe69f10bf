//! Scopes
//!
//! A scope is an absolute directory path acting as a namespace for key/value
//! pairs. Scopes form an implicit tree rooted at `/`; a scope's ancestors are
//! its path prefixes.

pub mod path;

use crate::error::ScopeError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Normalized absolute directory path.
///
/// Stored as a segment sequence; the root scope has no segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Scope {
    segments: Vec<String>,
}

impl Scope {
    /// The root scope `/`.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse an absolute path string.
    pub fn parse(raw: &str) -> Result<Self, ScopeError> {
        Ok(Self {
            segments: path::normalize_segments(raw)?,
        })
    }

    /// Build a scope from a filesystem path without touching the filesystem.
    pub fn from_path(path: &Path) -> Result<Self, ScopeError> {
        Ok(Self {
            segments: path::segments_from_path(path)?,
        })
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments below the root.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The parent scope, or `None` for the root.
    pub fn parent(&self) -> Option<Scope> {
        if self.is_root() {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// Candidate scopes from this scope up to the root, nearest first.
    ///
    /// For `/foo/bar` this yields `/foo/bar`, `/foo`, `/`.
    pub fn ancestors(&self) -> impl Iterator<Item = Scope> + '_ {
        self.prefixes().map(|segments| Scope {
            segments: segments.to_vec(),
        })
    }

    /// Segment prefixes in ancestor order, usable as borrowed map keys.
    pub(crate) fn prefixes(&self) -> impl Iterator<Item = &[String]> + '_ {
        (0..=self.segments.len())
            .rev()
            .map(move |len| &self.segments[..len])
    }
}

impl Borrow<[String]> for Scope {
    fn borrow(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for Scope {
    type Err = ScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scope::parse(s)
    }
}

impl TryFrom<String> for Scope {
    type Error = ScopeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Scope::parse(&value)
    }
}

impl From<Scope> for String {
    fn from(scope: Scope) -> Self {
        scope.to_string()
    }
}
