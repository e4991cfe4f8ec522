//! Static paths for detail pages

use anyhow::Result;

use super::Collection;
use crate::i18n::{expand_locales, StaticPaths};
use crate::Site;

/// Print the locale-expanded static paths as JSON
pub fn run(site: &Site, collection: Collection) -> Result<()> {
    let paths = static_paths(site, collection)?;
    println!("{}", serde_json::to_string_pretty(&paths)?);
    Ok(())
}

/// Every `(id, locale)` pair of `collection` that must be pre-rendered
pub fn static_paths(site: &Site, collection: Collection) -> Result<StaticPaths> {
    let renderer = site.renderer();

    let ids = match collection {
        Collection::Posts => site.posts(&renderer).ids()?,
        Collection::Projects => site.projects(&renderer).ids()?,
    };
    tracing::debug!("Expanding {} paths over {:?}", ids.len(), site.config.locales);

    Ok(expand_locales(ids, site.config.locales()))
}
