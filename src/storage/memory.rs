// ABOUTME: In-memory template store for tests and embedded template sets
// ABOUTME: Tracks read counts so callers can observe fetch behavior

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

use super::error::{Result, StorageError};
use super::TemplateStore;

/// Serves template sources from an in-process map.
///
/// Every successful or failed lookup increments the read counter, which makes
/// fetch behavior observable without touching a filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<PathBuf, Vec<u8>>>,
    reads: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a template source at the given path
    pub async fn insert(&self, path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) {
        let mut entries = self.entries.write().await;
        entries.insert(path.into(), bytes.into());
    }

    /// Number of read attempts observed so far
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TemplateStore for MemoryStore {
    async fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        self.reads.fetch_add(1, Ordering::SeqCst);

        let entries = self.entries.read().await;
        entries
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                path: path.to_path_buf(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_read() {
        let store = MemoryStore::new();
        store.insert("/site/templates/a.tpl", "hello").await;

        let bytes = store
            .read_bytes(Path::new("/site/templates/a.tpl"))
            .await
            .unwrap();
        assert_eq!(bytes, b"hello");
        assert_eq!(store.read_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_path_counts_as_read() {
        let store = MemoryStore::new();
        let result = store.read_bytes(Path::new("/nowhere.tpl")).await;

        assert!(matches!(result, Err(StorageError::NotFound { .. })));
        assert_eq!(store.read_count(), 1);
    }
}
