//! Scope path normalization utilities

use crate::error::ScopeError;
use std::path::{Path, PathBuf};

/// Split an absolute path string into normalized segments.
///
/// This function:
/// 1. Rejects relative, empty, and NUL-containing input
/// 2. Drops empty segments (repeated or trailing slashes) and `.`
/// 3. Resolves `..` lexically; `..` at the root stays at the root
///
/// Segment text is kept byte-for-byte; no Unicode normalization is applied.
///
/// No filesystem access is performed; symlinks are not resolved.
pub fn normalize_segments(raw: &str) -> Result<Vec<String>, ScopeError> {
    if raw.is_empty() {
        return Err(ScopeError::Empty);
    }
    if raw.contains('\0') {
        return Err(ScopeError::NulByte(raw.to_string()));
    }
    if !raw.starts_with('/') {
        return Err(ScopeError::NotAbsolute(raw.to_string()));
    }

    let mut segments: Vec<String> = Vec::new();
    for part in raw.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            name => segments.push(name.to_string()),
        }
    }

    Ok(segments)
}

/// Convert a filesystem path into scope segments.
///
/// The path must be valid UTF-8 and absolute in the `/`-rooted sense.
pub fn segments_from_path(path: &Path) -> Result<Vec<String>, ScopeError> {
    let raw = path
        .to_str()
        .ok_or_else(|| ScopeError::NotUtf8(path.to_path_buf()))?;
    normalize_segments(raw)
}

/// The process working directory, simplified for use as a current location.
pub fn working_directory() -> std::io::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(dunce::simplified(&cwd).to_path_buf())
}
