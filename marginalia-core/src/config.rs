//! Configuration parsing and management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Main configuration struct matching the marginalia.yml schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_title")]
    pub title: String,

    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_content_dir")]
    pub content: PathBuf,

    #[serde(default = "default_output_dir")]
    pub output: PathBuf,

    #[serde(default = "default_assets_dir")]
    pub assets: PathBuf,

    /// Stylesheet inlined into every page; the embedded default when unset
    #[serde(default)]
    pub stylesheet: Option<PathBuf>,
}

fn default_site_title() -> String {
    String::from("Blog Posts")
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("./content")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./public")
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("./assets")
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&contents)?;

        // Store config file path for relative path resolution
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!("No config at {:?}; using defaults", path);
            Ok(Self::default())
        }
    }

    /// Get the content directory, resolved relative to the config file
    pub fn content_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.content)
    }

    /// Get the output directory, resolved relative to the config file
    pub fn output_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.output)
    }

    /// Get the assets directory, resolved relative to the config file
    pub fn assets_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.assets)
    }

    /// Get the stylesheet override, if configured
    pub fn stylesheet_path(&self) -> Option<PathBuf> {
        self.paths.stylesheet.as_ref().map(|p| self.resolve_path(p))
    }

    /// Resolve a path relative to the config file location
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else if let Some(config_path) = &self.config_path {
            if let Some(parent) = config_path.parent() {
                parent.join(path)
            } else {
                path.to_path_buf()
            }
        } else {
            path.to_path_buf()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            paths: PathsConfig::default(),
            config_path: None,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_site_title(),
            url: None,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            content: default_content_dir(),
            output: default_output_dir(),
            assets: default_assets_dir(),
            stylesheet: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.site.title, "Blog Posts");
        assert_eq!(config.paths.content, PathBuf::from("./content"));
        assert_eq!(config.paths.output, PathBuf::from("./public"));
        assert_eq!(config.paths.assets, PathBuf::from("./assets"));
        assert!(config.paths.stylesheet.is_none());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("site:\n  title: My Journal\n").unwrap();
        assert_eq!(config.site.title, "My Journal");
        assert_eq!(config.paths.output, PathBuf::from("./public"));
    }

    #[test]
    fn test_paths_resolve_relative_to_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("marginalia.yml");
        std::fs::write(&config_path, "paths:\n  content: notes\n").unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.content_dir(), dir.path().join("notes"));
        assert_eq!(config.output_dir(), dir.path().join("./public"));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default("does-not-exist.yml").unwrap();
        assert_eq!(config.site.title, "Blog Posts");
    }
}
