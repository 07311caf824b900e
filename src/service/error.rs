// ABOUTME: Error type surfaced by the rendering service entry points
// ABOUTME: Aggregates storage, compile, and render failures without rewrapping them

use thiserror::Error;

use crate::compile::CompileError;
use crate::render::RenderError;
use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Compile error: {0}")]
    Compile(#[from] CompileError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
