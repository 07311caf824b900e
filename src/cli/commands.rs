// ABOUTME: Command implementations for the letterpress CLI
// ABOUTME: Builds the rendering service from configuration and executes render requests

use anyhow::{Context as _, Result};
use serde_json::Value as JsonValue;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use super::Config;
use crate::cache::TemplateCache;
use crate::service::{TemplateService, TemplatingConfig};
use crate::storage::FileStore;

/// Render a named template and deliver the output
pub async fn render_template(
    template: String,
    model: JsonValue,
    output: Option<PathBuf>,
    base_dir: Option<PathBuf>,
    static_compile: bool,
    config: &Config,
) -> Result<()> {
    let mut templating = config.templating.clone();
    if let Some(base_dir) = base_dir {
        templating.base_dir = base_dir;
    }
    if static_compile {
        templating.statically_compile = true;
    }

    let service = build_service(&templating);

    info!("Rendering template: {}", template);
    let bytes = service
        .render_template(&template, &model)
        .await
        .with_context(|| format!("Failed to render template '{}'", template))?;

    deliver(bytes, output).await
}

/// Render the built-in error page and deliver the output
pub async fn render_error_page(
    model: JsonValue,
    output: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    let service = build_service(&config.templating);

    info!("Rendering built-in error page");
    let bytes = service
        .render_error(&model)
        .await
        .context("Failed to render error page")?;

    deliver(bytes, output).await
}

fn build_service(templating: &TemplatingConfig) -> TemplateService {
    let store = Arc::new(FileStore::new());
    let cache = Arc::new(TemplateCache::new(templating.cache_capacity));

    debug!(
        "Template directory: {}, cache capacity: {}",
        templating.template_dir().display(),
        templating.cache_capacity
    );

    TemplateService::new(templating, store, cache)
}

async fn deliver(bytes: Vec<u8>, output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            tokio::fs::write(&path, &bytes)
                .await
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            info!("Wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => {
            use std::io::Write;
            std::io::stdout().write_all(&bytes)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn site_with_template(name: &str, contents: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("templates")).unwrap();
        std::fs::write(dir.path().join("templates").join(name), contents).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_deliver_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.html");

        deliver(b"rendered".to_vec(), Some(path.clone()))
            .await
            .unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"rendered");
    }

    #[tokio::test]
    async fn test_deliver_to_stdout() {
        deliver(b"rendered\n".to_vec(), None).await.unwrap();
    }

    #[tokio::test]
    async fn test_deliver_to_unwritable_path_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir").join("out.html");

        let result = deliver(b"rendered".to_vec(), Some(path)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_render_template_command() {
        let dir = site_with_template("greet.tpl", "Hi {{name}}");
        let out = dir.path().join("greet.html");

        render_template(
            "greet.tpl".to_string(),
            json!({"name": "World"}),
            Some(out.clone()),
            Some(dir.path().to_path_buf()),
            false,
            &Config::default(),
        )
        .await
        .unwrap();

        assert_eq!(std::fs::read(&out).unwrap(), b"Hi World");
    }

    #[tokio::test]
    async fn test_render_template_command_static_mode() {
        let dir = site_with_template("greet.tpl", "Hi {{name}}");
        let out = dir.path().join("greet.html");

        render_template(
            "greet.tpl".to_string(),
            json!({"name": "World"}),
            Some(out.clone()),
            Some(dir.path().to_path_buf()),
            true,
            &Config::default(),
        )
        .await
        .unwrap();

        assert_eq!(std::fs::read(&out).unwrap(), b"Hi World");
    }

    #[tokio::test]
    async fn test_render_missing_template_fails() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("templates")).unwrap();
        let out = dir.path().join("never.html");

        let result = render_template(
            "gone.tpl".to_string(),
            json!({}),
            Some(out.clone()),
            Some(dir.path().to_path_buf()),
            false,
            &Config::default(),
        )
        .await;

        assert!(result.is_err());
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn test_render_error_page_command() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("error.html");

        render_error_page(
            json!({"title": "Oops", "message": "it broke"}),
            Some(out.clone()),
            &Config::default(),
        )
        .await
        .unwrap();

        let html = std::fs::read_to_string(&out).unwrap();
        assert!(html.contains("Oops"));
        assert!(html.contains("it broke"));
    }
}
