//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ProjectorError;

/// Map domain/service errors to a single line for stderr.
pub fn map_error(e: &ProjectorError) -> String {
    match e {
        ProjectorError::InvalidScope(inner) => {
            format!("projector: current location is not usable: {}", inner)
        }
        other => format!("projector: {}", other),
    }
}
