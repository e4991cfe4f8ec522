//! Generate build artifacts

use anyhow::Result;
use std::path::PathBuf;

use crate::generator::Generator;
use crate::Site;

/// Load post summaries and write the RSS feed
pub fn run(site: &Site) -> Result<PathBuf> {
    let start = std::time::Instant::now();

    let renderer = site.renderer();
    let posts = site.posts(&renderer).load_summaries()?;
    tracing::info!("Loaded {} posts", posts.len());

    let path = Generator::new(site).generate_feed(&posts)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(path)
}
