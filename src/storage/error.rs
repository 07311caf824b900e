// ABOUTME: Error types for template storage operations
// ABOUTME: Distinguishes missing sources from underlying IO failures

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Template source not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read template source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, StorageError>;
