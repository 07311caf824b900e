// ABOUTME: Main library module for the letterpress template rendering engine
// ABOUTME: Exports all core modules and provides the public API

pub mod cache;
pub mod cli;
pub mod compile;
pub mod render;
pub mod service;
pub mod storage;

// Re-export commonly used types
pub use cache::TemplateCache;
pub use cli::{App, Args, Config};
pub use compile::{CompiledTemplate, TemplateCompiler};
pub use render::Renderer;
pub use service::{ServiceError, TemplateService, TemplatingConfig};
pub use storage::{FileStore, MemoryStore, TemplateStore};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
