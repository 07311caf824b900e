// ABOUTME: Template rendering service orchestrating the public entry points
// ABOUTME: Performs the cache-check, fetch-if-absent, compile, cache, render sequence

use serde_json::Value as JsonValue;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use super::config::TemplatingConfig;
use super::error::Result;
use crate::cache::TemplateCache;
use crate::compile::{CompiledTemplate, TemplateCompiler};
use crate::render::Renderer;
use crate::storage::TemplateStore;

// Bundled error-page source; read from the crate, never from storage.
const ERROR_PAGE_NAME: &str = "errorpage";
const ERROR_PAGE_SOURCE: &str = include_str!("error_page.hbs");

/// Public entry points for rendering named templates and the error page.
///
/// The cache is injected so one cache serves the whole process; the service
/// holds it for its lifetime along with the resident error-page source.
pub struct TemplateService {
    store: Arc<dyn TemplateStore>,
    cache: Arc<TemplateCache>,
    template_dir: PathBuf,
    statically_compile: bool,
    error_page_source: String,
}

impl TemplateService {
    pub fn new(
        config: &TemplatingConfig,
        store: Arc<dyn TemplateStore>,
        cache: Arc<TemplateCache>,
    ) -> Self {
        Self {
            store,
            cache,
            template_dir: config.template_dir(),
            statically_compile: config.statically_compile,
            error_page_source: ERROR_PAGE_SOURCE.to_string(),
        }
    }

    /// Render the template named `name` against `model`.
    ///
    /// On a cache hit the template renders immediately; on a miss its source
    /// is fetched from storage, compiled, cached, and rendered. Storage and
    /// compile failures surface as-is, and a failed pipeline never populates
    /// the cache.
    pub async fn render_template(&self, name: &str, model: &JsonValue) -> Result<Vec<u8>> {
        let compiler = TemplateCompiler::new(self.statically_compile);

        if let Some(cached) = self.cache.get(name).await {
            debug!("Template cache hit: {}", name);
            return self.render(&compiler, cached, model).await;
        }

        debug!("Template cache miss: {}", name);
        let path = self.template_dir.join(name);
        let bytes = self.store.read_bytes(&path).await?;
        let compiled = Arc::new(compiler.compile(&bytes, name)?);
        self.cache.put(name, Arc::clone(&compiled)).await;

        self.render(&compiler, compiled, model).await
    }

    /// Render the built-in error page against `model`.
    ///
    /// The source is resident in-process and compiled fresh on every call,
    /// so this path never depends on storage availability and never occupies
    /// a cache slot. A failure here is terminal; there is no further
    /// fallback.
    pub async fn render_error(&self, model: &JsonValue) -> Result<Vec<u8>> {
        let compiler = TemplateCompiler::new(self.statically_compile);
        let compiled = Arc::new(compiler.compile(self.error_page_source.as_bytes(), ERROR_PAGE_NAME)?);

        self.render(&compiler, compiled, model).await
    }

    /// Shared handle to the compiled-template cache
    pub fn cache(&self) -> &Arc<TemplateCache> {
        &self.cache
    }

    async fn render(
        &self,
        compiler: &TemplateCompiler,
        compiled: Arc<CompiledTemplate>,
        model: &JsonValue,
    ) -> Result<Vec<u8>> {
        let renderer = Renderer::new(compiler, self.store.as_ref(), &self.cache, &self.template_dir);
        let bytes = renderer.render(compiled, model).await?;
        Ok(bytes)
    }
}
