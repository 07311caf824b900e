// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides shared functionality for building template workspaces and services

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use letterpress::service::{TemplateService, TemplatingConfig};
use letterpress::storage::{FileStore, MemoryStore, TemplateStore};
use letterpress::TemplateCache;

/// Filesystem-backed template workspace rooted in a tempdir
pub struct TestSite {
    temp: TempDir,
}

impl TestSite {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        std::fs::create_dir_all(temp.path().join("templates")).unwrap();
        Self { temp }
    }

    pub fn write_template(&self, name: &str, contents: &str) {
        let path = self.temp.path().join("templates").join(name);
        std::fs::write(path, contents).unwrap();
    }

    pub fn base_dir(&self) -> &std::path::Path {
        self.temp.path()
    }

    pub fn config(&self) -> TemplatingConfig {
        TemplatingConfig {
            base_dir: self.temp.path().to_path_buf(),
            ..Default::default()
        }
    }

    pub fn service(&self) -> TemplateService {
        self.service_with(64, false)
    }

    pub fn service_with(&self, cache_capacity: usize, statically_compile: bool) -> TemplateService {
        let config = TemplatingConfig {
            cache_capacity,
            statically_compile,
            ..self.config()
        };
        let store = Arc::new(FileStore::new());
        let cache = Arc::new(TemplateCache::new(cache_capacity));
        TemplateService::new(&config, store, cache)
    }
}

/// Memory-backed template workspace for observing storage reads
pub struct MemorySite {
    pub store: Arc<MemoryStore>,
    config: TemplatingConfig,
}

impl MemorySite {
    pub fn new() -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
            config: TemplatingConfig {
                base_dir: PathBuf::from("/site"),
                ..Default::default()
            },
        }
    }

    pub async fn add_template(&self, name: &str, source: &str) {
        let path = self.config.template_dir().join(name);
        self.store.insert(path, source).await;
    }

    pub fn service(&self) -> TemplateService {
        self.service_with(64, false)
    }

    pub fn service_with(&self, cache_capacity: usize, statically_compile: bool) -> TemplateService {
        let config = TemplatingConfig {
            cache_capacity,
            statically_compile,
            ..self.config.clone()
        };
        let cache = Arc::new(TemplateCache::new(cache_capacity));
        let store: Arc<dyn TemplateStore> = Arc::clone(&self.store) as Arc<dyn TemplateStore>;
        TemplateService::new(&config, store, cache)
    }

    pub fn read_count(&self) -> usize {
        self.store.read_count()
    }
}
