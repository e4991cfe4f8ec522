//! Content module - handles posts, projects and content processing

mod frontmatter;
pub mod listing;
pub mod loader;
mod markdown;
pub mod metadata;
mod post;
mod reading_time;

pub use frontmatter::{
    extract, parse_date_string, split, FrontMatterError, PostFrontMatter, ProjectFrontMatter,
};
pub use loader::ContentLoader;
pub use markdown::MarkdownRenderer;
pub use post::{Dated, Entity, Post, Project, Ranked, Rendered, Tagged};
pub use reading_time::estimate_minutes;
