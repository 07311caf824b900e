// ABOUTME: Template compilation module turning raw source bytes into executable templates
// ABOUTME: Supports ahead-of-time and per-render compilation strategies

pub mod compiler;
pub mod error;
pub mod template;

pub use compiler::TemplateCompiler;
pub use error::{CompileError, Result};
pub use template::{CompiledTemplate, TemplateBody};
