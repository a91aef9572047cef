//! Error types for meshlint.

use thiserror::Error;

/// Errors that can occur before the analyzer core is invoked.
///
/// Malformed *content* (wrong kind, missing fields) is never an error -
/// it is reported as findings. These variants cover the decode boundary:
/// unreadable files and syntactically invalid documents.
#[derive(Error, Debug)]
pub enum MeshLintError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, MeshLintError>;
