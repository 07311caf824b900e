// ABOUTME: Construction-time configuration for the rendering service
// ABOUTME: Base directory, template subdirectory, cache capacity, and compile mode

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatingConfig {
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,

    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    #[serde(default)]
    pub statically_compile: bool,
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_templates_dir() -> String {
    "templates".to_string()
}

fn default_cache_capacity() -> usize {
    64
}

impl Default for TemplatingConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            templates_dir: default_templates_dir(),
            cache_capacity: default_cache_capacity(),
            statically_compile: false,
        }
    }
}

impl TemplatingConfig {
    /// Directory all template identifiers are resolved beneath
    pub fn template_dir(&self) -> PathBuf {
        self.base_dir.join(&self.templates_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TemplatingConfig::default();

        assert_eq!(config.templates_dir, "templates");
        assert_eq!(config.cache_capacity, 64);
        assert!(!config.statically_compile);
    }

    #[test]
    fn test_template_dir_join() {
        let config = TemplatingConfig {
            base_dir: PathBuf::from("/srv/site"),
            ..Default::default()
        };

        assert_eq!(config.template_dir(), PathBuf::from("/srv/site/templates"));
    }
}
