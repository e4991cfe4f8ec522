//! Show one fully loaded entity

use anyhow::Result;

use super::Collection;
use crate::Site;

/// Print the full record of `id` as JSON
pub fn run(site: &Site, collection: Collection, id: &str) -> Result<()> {
    println!("{}", render(site, collection, id)?);
    Ok(())
}

/// Full record of `id`, with rendered content, as pretty JSON
pub fn render(site: &Site, collection: Collection, id: &str) -> Result<String> {
    let renderer = site.renderer();

    let json = match collection {
        Collection::Posts => serde_json::to_string_pretty(&site.posts(&renderer).load_full(id)?)?,
        Collection::Projects => {
            serde_json::to_string_pretty(&site.projects(&renderer).load_full(id)?)?
        }
    };

    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_show_full_post() {
        let dir = tempfile::tempdir().unwrap();
        let posts = dir.path().join("posts");
        fs::create_dir(&posts).unwrap();
        fs::write(
            posts.join("hello.md"),
            "---\ntitle: Hello\npriority: 1\ndate: 2024-01-01\nauthor: Gauthier\n---\nSome words here.\n",
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render(&site, Collection::Posts, "hello").unwrap()).unwrap();

        assert_eq!(json["id"], "hello");
        assert_eq!(json["content"], "<p>Some words here.</p>\n");
        assert_eq!(json["timeEstimate"], 1);
        assert!(json.get("bannerPath").is_none());
    }

    #[test]
    fn test_show_missing_project() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("projects")).unwrap();
        let site = Site::new(dir.path()).unwrap();

        let err = render(&site, Collection::Projects, "ghost").unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }
}
