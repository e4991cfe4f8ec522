//! Subcommand implementations

pub mod clean;
pub mod generate;
pub mod list;
pub mod paths;
pub mod show;

use anyhow::bail;

/// Which collection a command works on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Posts,
    Projects,
}

impl std::str::FromStr for Collection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "post" | "posts" => Ok(Self::Posts),
            "project" | "projects" => Ok(Self::Projects),
            _ => bail!("Unknown collection: {}. Available: posts, projects", s),
        }
    }
}
