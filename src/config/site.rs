//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,

    // Directory
    pub posts_dir: String,
    pub projects_dir: String,
    pub public_dir: String,

    // Feed, relative to public_dir
    pub feed_path: String,

    // Locales every detail page is rendered for; empty means no locale routing
    #[serde(default)]
    pub locales: Vec<String>,

    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Folio".to_string(),
            description: String::new(),
            author: String::new(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),

            posts_dir: "posts".to_string(),
            projects_dir: "projects".to_string(),
            public_dir: "public".to_string(),

            feed_path: "rss.xml".to_string(),

            locales: Vec::new(),

            highlight: HighlightConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid configuration in {:?}", path))?;
        tracing::debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Locales as an optional list, `None` when none are configured
    pub fn locales(&self) -> Option<&[String]> {
        if self.locales.is_empty() {
            None
        } else {
            Some(&self.locales)
        }
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            theme: "base16-ocean.dark".to_string(),
            line_number: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.posts_dir, "posts");
        assert_eq!(config.feed_path, "rss.xml");
        assert!(config.locales().is_none());
        assert!(config.highlight.enable);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Site
url: https://gauthier-cassany.com
locales:
  - en
  - fr
highlight:
  line_number: false
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Site");
        assert_eq!(config.url, "https://gauthier-cassany.com");
        assert_eq!(config.locales(), Some(&["en".to_string(), "fr".to_string()][..]));
        assert!(!config.highlight.line_number);
        assert_eq!(config.highlight.theme, "base16-ocean.dark");
        assert_eq!(config.public_dir, "public");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "title: From Disk\nposts_dir: articles\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.title, "From Disk");
        assert_eq!(config.posts_dir, "articles");
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "locales: [unclosed\n").unwrap();

        let err = SiteConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid configuration"));
    }
}
