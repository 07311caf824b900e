// ABOUTME: Configuration management for the letterpress application
// ABOUTME: Handles loading and merging configuration from files and environment variables

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::service::TemplatingConfig;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub templating: TemplatingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::find_config_file()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let mut config: Config = serde_yaml::from_str(&contents)?;

            config.merge_env()?;

            Ok(config)
        } else {
            let mut config = Config::default();
            config.merge_env()?;
            Ok(config)
        }
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Result<PathBuf> {
        let possible_paths = vec![
            PathBuf::from("letterpress.yaml"),
            PathBuf::from("letterpress.yml"),
            PathBuf::from(".letterpress.yaml"),
            PathBuf::from(".letterpress.yml"),
        ];

        // Check home directory
        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".letterpress").join("config.yaml");
            if home_config.exists() {
                return Ok(home_config);
            }
        }

        // Check current directory
        for path in possible_paths {
            if path.exists() {
                return Ok(path);
            }
        }

        // Return default path (may not exist)
        Ok(PathBuf::from("letterpress.yaml"))
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) -> Result<()> {
        if let Ok(base_dir) = std::env::var("LETTERPRESS_BASE_DIR") {
            self.templating.base_dir = PathBuf::from(base_dir);
        }
        if let Ok(templates_dir) = std::env::var("LETTERPRESS_TEMPLATES_DIR") {
            self.templating.templates_dir = templates_dir;
        }
        if let Ok(capacity) = std::env::var("LETTERPRESS_CACHE_CAPACITY") {
            self.templating.cache_capacity = capacity.parse()?;
        }
        if let Ok(static_compile) = std::env::var("LETTERPRESS_STATIC_COMPILE") {
            self.templating.statically_compile = static_compile.parse()?;
        }

        if let Ok(level) = std::env::var("LETTERPRESS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("LETTERPRESS_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.templating.templates_dir, "templates");
        assert_eq!(config.templating.cache_capacity, 64);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("letterpress.yaml");

        let config_content = r#"
templating:
  base_dir: /srv/site
  cache_capacity: 16
  statically_compile: true
logging:
  level: debug
  format: compact
"#;
        std::fs::write(&config_path, config_content).unwrap();

        let config = Config::load(Some(config_path)).unwrap();

        assert_eq!(config.templating.base_dir, PathBuf::from("/srv/site"));
        assert_eq!(config.templating.cache_capacity, 16);
        assert!(config.templating.statically_compile);
        assert_eq!(config.logging.level, "debug");
    }
}
