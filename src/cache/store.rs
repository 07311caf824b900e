// ABOUTME: Bounded compiled-template cache with least-recently-used eviction
// ABOUTME: The single lock boundary shared by all in-flight render pipelines

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::compile::CompiledTemplate;

/// Bounded mapping from template identifier to compiled template.
///
/// Lookups either return a fully compiled template or nothing; entries are
/// never partially visible. Concurrent misses for the same identifier may
/// each compile independently, and the cache retains whichever `put` lands
/// last. Earlier entries keep serving renders that already hold them.
#[derive(Debug)]
pub struct TemplateCache {
    capacity: usize,
    inner: RwLock<CacheInner>,
}

#[derive(Debug, Default)]
struct CacheInner {
    entries: HashMap<String, Arc<CompiledTemplate>>,
    // Front is the eviction candidate; back is the most recently used.
    order: VecDeque<String>,
}

impl TemplateCache {
    /// Create a cache holding at most `capacity` entries.
    ///
    /// A capacity of zero disables retention entirely; every lookup misses.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: RwLock::new(CacheInner::default()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Look up a compiled template, refreshing its recency on a hit.
    pub async fn get(&self, name: &str) -> Option<Arc<CompiledTemplate>> {
        let mut inner = self.inner.write().await;

        let template = inner.entries.get(name).cloned()?;
        inner.touch(name);
        Some(template)
    }

    /// Insert or replace a compiled template, evicting the least recently
    /// used entry when the cache is full.
    pub async fn put(&self, name: &str, template: Arc<CompiledTemplate>) {
        if self.capacity == 0 {
            return;
        }

        let mut inner = self.inner.write().await;

        if inner.entries.insert(name.to_string(), template).is_none()
            && inner.entries.len() > self.capacity
        {
            if let Some(evicted) = inner.order.pop_front() {
                inner.entries.remove(&evicted);
                debug!("Evicted template from cache: {}", evicted);
            }
        }
        inner.touch(name);
    }

    /// Drop a cached template, if present
    pub async fn invalidate(&self, name: &str) {
        let mut inner = self.inner.write().await;

        if inner.entries.remove(name).is_some() {
            if let Some(pos) = inner.order.iter().position(|n| n == name) {
                inner.order.remove(pos);
            }
        }
    }

    pub async fn contains(&self, name: &str) -> bool {
        let inner = self.inner.read().await;
        inner.entries.contains_key(name)
    }

    pub async fn len(&self) -> usize {
        let inner = self.inner.read().await;
        inner.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl CacheInner {
    fn touch(&mut self, name: &str) {
        if let Some(pos) = self.order.iter().position(|n| n == name) {
            self.order.remove(pos);
        }
        self.order.push_back(name.to_string());
    }
}
