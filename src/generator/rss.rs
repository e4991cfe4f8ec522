//! RSS 2.0 feed serialization

use std::fmt::Write;

use crate::config::SiteConfig;
use crate::content::{listing, Post};

/// Channel-level metadata of the feed
#[derive(Debug, Clone)]
pub struct Channel {
    pub title: String,
    /// Base site URL; item permalinks are built under it
    pub link: String,
    pub description: String,
    pub language: String,
}

impl Channel {
    /// Channel with only a base URL set
    pub fn new(link: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            link: link.into(),
            description: String::new(),
            language: "en".to_string(),
        }
    }
}

impl From<&SiteConfig> for Channel {
    fn from(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            link: config.url.clone(),
            description: config.description.clone(),
            language: config.language.clone(),
        }
    }
}

/// Permalink of a post under `base_url`
pub fn permalink(base_url: &str, id: &str) -> String {
    format!("{}/posts/{}", base_url.trim_end_matches('/'), id)
}

/// Serialize posts into a complete RSS 2.0 document.
///
/// Posts are ordered newest first here, whatever order they arrive in.
/// `lastBuildDate` is the raw date of the newest post, or empty when there
/// are no posts.
pub fn render_feed(posts: &[Post], channel: &Channel) -> String {
    let sorted = listing::by_date_descending(posts);
    let last_build = sorted.first().map(|p| p.date.as_str()).unwrap_or("");

    let mut feed = String::new();
    feed.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    feed.push('\n');
    feed.push_str(concat!(
        r#"<rss xmlns:dc="http://purl.org/dc/elements/1.1/""#,
        r#" xmlns:content="http://purl.org/rss/1.0/modules/content/""#,
        r#" xmlns:atom="http://www.w3.org/2005/Atom" version="2.0">"#,
    ));
    feed.push('\n');
    feed.push_str("  <channel>\n");
    let _ = writeln!(feed, "    <title>{}</title>", cdata(&channel.title));
    let _ = writeln!(feed, "    <link>{}</link>", escape_xml(&channel.link));
    let _ = writeln!(
        feed,
        "    <description>{}</description>",
        cdata(&channel.description)
    );
    let _ = writeln!(feed, "    <language>{}</language>", escape_xml(&channel.language));
    let _ = writeln!(
        feed,
        "    <lastBuildDate>{}</lastBuildDate>",
        escape_xml(last_build)
    );

    for post in &sorted {
        let href = escape_xml(&permalink(&channel.link, &post.id));
        feed.push_str("    <item>\n");
        let _ = writeln!(feed, "      <title>{}</title>", cdata(&post.title));
        let _ = writeln!(feed, "      <link>{}</link>", href);
        let _ = writeln!(feed, "      <pubDate>{}</pubDate>", escape_xml(&post.date));
        let _ = writeln!(feed, "      <guid isPermaLink=\"false\">{}</guid>", href);
        let _ = writeln!(
            feed,
            "      <description>{}</description>",
            cdata(post.description.as_deref().unwrap_or(""))
        );
        feed.push_str("    </item>\n");
    }

    feed.push_str("  </channel>\n");
    feed.push_str("</rss>\n");

    tracing::debug!("Serialized feed with {} items", sorted.len());
    feed
}

/// Wrap text in a CDATA section, splitting any `]]>` it contains
fn cdata(s: &str) -> String {
    let clean = strip_invalid_xml_chars(s);
    format!("<![CDATA[{}]]>", clean.replace("]]>", "]]]]><![CDATA[>"))
}

/// Escape XML special characters
fn escape_xml(s: &str) -> String {
    strip_invalid_xml_chars(s)
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Strip invalid XML control characters (except tab, newline, carriage return)
/// XML 1.0 only allows: #x9 | #xA | #xD | [#x20-#xD7FF] | [#xE000-#xFFFD] | [#x10000-#x10FFFF]
fn strip_invalid_xml_chars(s: &str) -> String {
    s.chars()
        .filter(|&c| {
            c == '\t'
                || c == '\n'
                || c == '\r'
                || ('\u{0020}'..='\u{D7FF}').contains(&c)
                || ('\u{E000}'..='\u{FFFD}').contains(&c)
                || ('\u{10000}'..='\u{10FFFF}').contains(&c)
        })
        .collect()
}
