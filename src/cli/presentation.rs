//! CLI presentation: text and json formatters for printed scopes.

use crate::error::ProjectorError;
use crate::store::{ScopeEntries, ScopeMap, StoreDocument};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

/// Every scope, unmerged, in the same shape as the store file.
pub fn format_scopes_json(scopes: &ScopeMap) -> Result<String, ProjectorError> {
    let document = StoreDocument {
        projector: scopes.clone(),
    };
    serde_json::to_string(&document).map_err(|e| ProjectorError::Output(e.to_string()))
}

pub fn format_scopes_text(scopes: &ScopeMap) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Scope", "Key", "Value"]);
    for (scope, entries) in scopes {
        let scope = scope.to_string();
        for (key, value) in entries {
            table.add_row(vec![scope.as_str(), key.as_str(), value.as_str()]);
        }
    }
    table.to_string()
}

/// Resolved key/value pairs as a flat JSON object.
pub fn format_entries_json(entries: &ScopeEntries) -> Result<String, ProjectorError> {
    serde_json::to_string(entries).map_err(|e| ProjectorError::Output(e.to_string()))
}

pub fn format_entries_text(entries: &ScopeEntries) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Key", "Value"]);
    for (key, value) in entries {
        table.add_row(vec![key.as_str(), value.as_str()]);
    }
    table.to_string()
}
