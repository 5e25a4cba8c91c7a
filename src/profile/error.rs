//! Profile loading and validation errors.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a profile cannot be loaded or fails validation.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The profile file could not be read.
    #[error("failed to read profile {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid profile JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid profile YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The profile parsed but is missing required structure.
    #[error("profile failed validation:\n  - {}", .0.join("\n  - "))]
    Invalid(Vec<String>),
}
