//! List site content

use anyhow::{bail, Result};

use crate::content::{listing, Ranked};
use crate::{Error, Site};

/// Listing options from the command line
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Keep only the first `limit` entries
    pub limit: Option<usize>,
    /// Keep posts sharing one of these tags; empty keeps all
    pub tags: Vec<String>,
    /// Order posts newest first instead of by priority
    pub by_date: bool,
}

/// List site content by type
pub fn run(site: &Site, content_type: &str, options: &ListOptions) -> Result<()> {
    for line in lines(site, content_type, options)? {
        println!("{}", line);
    }
    Ok(())
}

/// Lines printed for a listing
pub fn lines(site: &Site, content_type: &str, options: &ListOptions) -> Result<Vec<String>> {
    if options.limit == Some(0) {
        return Err(Error::InvalidArgument("limit must be at least 1, got 0".to_string()).into());
    }
    let renderer = site.renderer();

    let lines = match content_type {
        "post" | "posts" => {
            let posts = site.posts(&renderer).load_summaries()?;
            let posts = listing::by_tag_intersection(&posts, &options.tags);
            let posts = if options.by_date {
                let mut sorted = listing::by_date_descending(&posts);
                sorted.truncate(options.limit.unwrap_or(sorted.len()));
                sorted
            } else {
                top_by_priority(&posts, options.limit)?
            };

            let mut lines = vec![format!("Posts ({}):", posts.len())];
            lines.extend(posts.iter().map(|post| {
                format!(
                    "  {} - {} [{}] {}",
                    post.date,
                    post.title,
                    post.id,
                    post.tags.join(", ")
                )
                .trim_end()
                .to_string()
            }));
            lines
        }
        "project" | "projects" => {
            let projects = site.projects(&renderer).load_summaries()?;
            let projects = top_by_priority(&projects, options.limit)?;

            let mut lines = vec![format!("Projects ({}):", projects.len())];
            lines.extend(projects.iter().map(|project| {
                format!(
                    "  {} - {} [{}]",
                    project.priority, project.title, project.id
                )
            }));
            lines
        }
        "tag" | "tags" => {
            let posts = site.posts(&renderer).load_summaries()?;
            let tags = listing::collect_distinct_tags(&posts);

            let mut lines = vec![format!("Tags ({}):", tags.len())];
            lines.extend(tags.iter().map(|tag| format!("  {}", tag)));
            lines
        }
        _ => {
            bail!(
                "Unknown type: {}. Available: posts, projects, tags",
                content_type
            );
        }
    };

    Ok(lines)
}

/// Priority order, all entries unless a limit is given
fn top_by_priority<T: Ranked + Clone>(entities: &[T], limit: Option<usize>) -> Result<Vec<T>> {
    match limit {
        Some(n) => Ok(listing::by_priority(entities, n)?),
        None if entities.is_empty() => Ok(Vec::new()),
        None => Ok(listing::by_priority(entities, entities.len())?),
    }
}
