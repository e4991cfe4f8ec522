//! Generator module - writes build artifacts derived from loaded content

pub mod rss;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::content::Post;
use crate::Site;

pub use rss::{render_feed, Channel};

/// Writes the serialized feed into the published-assets directory
pub struct Generator<'a> {
    site: &'a Site,
}

impl<'a> Generator<'a> {
    /// Create a new generator
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Where the feed is written
    pub fn feed_path(&self) -> PathBuf {
        self.site.public_dir.join(&self.site.config.feed_path)
    }

    /// Serialize `posts` and write the feed, returning its path
    pub fn generate_feed(&self, posts: &[Post]) -> Result<PathBuf> {
        let feed = render_feed(posts, &Channel::from(&self.site.config));
        let output_path = self.feed_path();

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }
        fs::write(&output_path, feed)
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        tracing::info!("Generated {:?} with {} items", output_path, posts.len());

        Ok(output_path)
    }
}
