// ABOUTME: Error types for template rendering
// ABOUTME: Covers execution failures and failures raised while resolving nested templates

use thiserror::Error;

use crate::compile::CompileError;
use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template execution failed: {0}")]
    Execution(#[from] handlebars::RenderError),

    #[error("Failed to prepare template {name} for rendering: {message}")]
    Registration { name: String, message: String },

    #[error("Template nesting exceeds depth limit {limit} at {name}")]
    NestingTooDeep { name: String, limit: usize },

    #[error("Failed to fetch nested template: {0}")]
    NestedStorage(#[from] StorageError),

    #[error("Failed to compile nested template: {0}")]
    NestedCompile(#[from] CompileError),
}

pub type Result<T> = std::result::Result<T, RenderError>;
