// ABOUTME: Storage module for asynchronous template source acquisition
// ABOUTME: Defines the read-bytes-by-path capability and its built-in backends

pub mod error;
pub mod file;
pub mod memory;

pub use error::{Result, StorageError};
pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use std::path::Path;

/// Capability to read template source bytes by path, asynchronously.
///
/// A read is a single attempt; callers never retry through this trait.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    async fn read_bytes(&self, path: &Path) -> Result<Vec<u8>>;
}
