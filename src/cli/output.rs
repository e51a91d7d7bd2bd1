//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::BaselineError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &BaselineError) -> String {
    format!("error: {}", e)
}
