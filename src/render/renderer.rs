// ABOUTME: Renderer executing compiled templates against a model
// ABOUTME: Recursively resolves nested templates through the same cache-check, fetch, compile sequence

use handlebars::Handlebars;
use serde_json::Value as JsonValue;
use std::collections::HashSet;
use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::sync::Arc;
use tracing::debug;

use super::error::{RenderError, Result};
use super::helpers;
use crate::cache::TemplateCache;
use crate::compile::{CompiledTemplate, TemplateBody, TemplateCompiler};
use crate::storage::TemplateStore;

/// Upper bound on nested template resolution depth. A template chain deeper
/// than this (including a template transitively referencing itself) fails
/// the render instead of fanning out further.
pub const MAX_NESTING_DEPTH: usize = 16;

/// Executes a compiled template against a model.
///
/// The renderer is handed the same compiler, storage, and cache the pipeline
/// used, so any nested template reference re-enters the identical
/// cache-check, fetch, compile sequence. One top-level render may therefore
/// fan out into several outstanding storage reads.
pub struct Renderer<'a> {
    compiler: &'a TemplateCompiler,
    store: &'a dyn TemplateStore,
    cache: &'a TemplateCache,
    template_dir: &'a Path,
}

impl<'a> Renderer<'a> {
    pub fn new(
        compiler: &'a TemplateCompiler,
        store: &'a dyn TemplateStore,
        cache: &'a TemplateCache,
        template_dir: &'a Path,
    ) -> Self {
        Self {
            compiler,
            store,
            cache,
            template_dir,
        }
    }

    /// Render `compiled` against `model`, producing output bytes.
    ///
    /// The output is produced exactly once; a failure anywhere in nested
    /// resolution fails the whole render with no partial output.
    pub async fn render(
        &self,
        compiled: Arc<CompiledTemplate>,
        model: &JsonValue,
    ) -> Result<Vec<u8>> {
        let mut registry = build_registry();
        let mut visited = HashSet::new();

        self.register_tree(&mut registry, Arc::clone(&compiled), &mut visited, 0)
            .await?;

        let output = registry.render(compiled.name(), model)?;
        Ok(output.into_bytes())
    }

    /// Resolve a template by name: cache check, then fetch and compile on a
    /// miss, inserting the result into the shared cache.
    pub async fn resolve(&self, name: &str) -> Result<Arc<CompiledTemplate>> {
        if let Some(cached) = self.cache.get(name).await {
            debug!("Nested template cache hit: {}", name);
            return Ok(cached);
        }

        debug!("Nested template cache miss, fetching: {}", name);
        let path = self.template_dir.join(name);
        let bytes = self.store.read_bytes(&path).await?;
        let compiled = Arc::new(self.compiler.compile(&bytes, name)?);
        self.cache.put(name, Arc::clone(&compiled)).await;

        Ok(compiled)
    }

    // Registers `compiled` and its transitive references into the one-shot
    // registry. The visited set keeps diamond-shaped references from being
    // registered twice in one pass; the depth counter bounds reference
    // chains and transitive self-inclusion.
    fn register_tree<'b>(
        &'b self,
        registry: &'b mut Handlebars<'static>,
        compiled: Arc<CompiledTemplate>,
        visited: &'b mut HashSet<String>,
        depth: usize,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'b>> {
        Box::pin(async move {
            if depth > MAX_NESTING_DEPTH {
                return Err(RenderError::NestingTooDeep {
                    name: compiled.name().to_string(),
                    limit: MAX_NESTING_DEPTH,
                });
            }

            if !visited.insert(compiled.name().to_string()) {
                return Ok(());
            }

            match compiled.body() {
                TemplateBody::Parsed(template) => {
                    registry.register_template(compiled.name(), template.clone());
                }
                TemplateBody::Source(source) => {
                    registry
                        .register_template_string(compiled.name(), source)
                        .map_err(|e| RenderError::Registration {
                            name: compiled.name().to_string(),
                            message: e.to_string(),
                        })?;
                }
            }

            for reference in compiled.references() {
                if visited.contains(reference) {
                    continue;
                }
                let child = self.resolve(reference).await?;
                self.register_tree(&mut *registry, child, &mut *visited, depth + 1)
                    .await?;
            }

            Ok(())
        })
    }
}

fn build_registry() -> Handlebars<'static> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(false);
    helpers::register_helpers(&mut registry);
    registry
}
