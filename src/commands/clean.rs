//! Clean generated artifacts

use anyhow::Result;
use std::fs;

use crate::generator::Generator;
use crate::Site;

/// Remove the generated feed
pub fn run(site: &Site) -> Result<()> {
    let feed_path = Generator::new(site).feed_path();
    if feed_path.exists() {
        fs::remove_file(&feed_path)?;
        tracing::info!("Deleted: {:?}", feed_path);
    }

    Ok(())
}
