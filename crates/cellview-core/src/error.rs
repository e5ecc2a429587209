//! Error types for cellview

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CellviewError {
    // Scene file errors
    #[error("Scene file not found at {path}")]
    SceneNotFound { path: PathBuf },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CellviewError>;
