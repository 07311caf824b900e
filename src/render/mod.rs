// ABOUTME: Rendering module executing compiled templates against a model
// ABOUTME: Resolves nested template references through the shared cache and storage

pub mod error;
pub mod helpers;
pub mod renderer;

pub use error::{RenderError, Result};
pub use renderer::{Renderer, MAX_NESTING_DEPTH};
