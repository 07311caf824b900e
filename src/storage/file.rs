// ABOUTME: Filesystem-backed template store using tokio's async file IO
// ABOUTME: Maps missing files to a distinct not-found error

use async_trait::async_trait;
use std::path::Path;
use tracing::debug;

use super::error::{Result, StorageError};
use super::TemplateStore;

/// Reads template sources from the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TemplateStore for FileStore {
    async fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        debug!("Reading template source from {}", path.display());

        tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                StorageError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.tpl");
        std::fs::write(&path, "Hi {{name}}").unwrap();

        let store = FileStore::new();
        let bytes = store.read_bytes(&path).await.unwrap();
        assert_eq!(bytes, b"Hi {{name}}");
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.tpl");

        let store = FileStore::new();
        let result = store.read_bytes(&path).await;

        assert!(matches!(result, Err(StorageError::NotFound { .. })));
    }
}
