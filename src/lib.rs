//! folio-rs: build-time content pipeline for a personal site
//!
//! Reads markdown posts and portfolio projects with YAML front-matter,
//! renders them to HTML, orders and filters the listings page generation
//! needs, fans detail pages out across locales and serializes an RSS feed.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod i18n;

pub use error::{Error, Result};

use std::path::{Path, PathBuf};

use content::{ContentLoader, MarkdownRenderer, Post, Project};

/// A site rooted at a directory, with its configuration resolved
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Posts directory
    pub posts_dir: PathBuf,
    /// Projects directory
    pub projects_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Site {
    /// Create a site from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> anyhow::Result<Self> {
        let base_dir = base_dir.as_ref();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site from a directory and an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let posts_dir = base_dir.join(&config.posts_dir);
        let projects_dir = base_dir.join(&config.projects_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            posts_dir,
            projects_dir,
            public_dir,
        }
    }

    /// Build the markdown renderer configured for this site
    pub fn renderer(&self) -> MarkdownRenderer {
        MarkdownRenderer::with_options(&self.config.highlight)
    }

    /// Loader over the posts directory
    pub fn posts<'a>(&self, renderer: &'a MarkdownRenderer) -> ContentLoader<'a, Post> {
        ContentLoader::new(&self.posts_dir, renderer)
    }

    /// Loader over the projects directory
    pub fn projects<'a>(&self, renderer: &'a MarkdownRenderer) -> ContentLoader<'a, Project> {
        ContentLoader::new(&self.projects_dir, renderer)
    }
}
