//! Post and Project models

use serde::{Serialize, Serializer};

use super::frontmatter::{PostFrontMatter, ProjectFrontMatter};
use super::metadata::{self, field, required, Record};

/// Body of a full load: rendered HTML and its reading-time estimate
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub html: String,
    pub minutes: u32,
}

/// A content kind that the collection loader can build from a file
pub trait Entity: Sized {
    /// Front-matter schema the file must satisfy
    type FrontMatter: serde::de::DeserializeOwned;

    /// Singular name used in messages
    const KIND: &'static str;

    /// Assemble the entity; `rendered` is present only for full loads.
    fn assemble(id: String, front_matter: Self::FrontMatter, rendered: Option<Rendered>) -> Self;

    fn id(&self) -> &str;

    /// Ordered record with unset optional fields left out
    fn to_record(&self) -> Record;
}

/// Entities ordered by priority, then by title
pub trait Ranked {
    fn priority(&self) -> i64;
    fn title(&self) -> &str;
}

/// Entities carrying a publication date
pub trait Dated: Ranked {
    fn date(&self) -> &str;
}

/// Entities carrying tags
pub trait Tagged {
    fn tags(&self) -> &[String];
}

/// A blog post
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    /// File name without extension
    pub id: String,
    pub title: String,
    pub banner_path: Option<String>,
    /// Lower is shown first
    pub priority: i64,
    pub tags: Vec<String>,
    pub author: Option<String>,
    /// Raw date string as written in front-matter
    pub date: String,
    pub description: Option<String>,
    /// Rendered HTML, full loads only
    pub content: Option<String>,
    /// Reading minutes, full loads only
    pub time_estimate: Option<u32>,
}

impl Entity for Post {
    type FrontMatter = PostFrontMatter;

    const KIND: &'static str = "post";

    fn assemble(id: String, fm: PostFrontMatter, rendered: Option<Rendered>) -> Self {
        let (content, time_estimate) = match rendered {
            Some(Rendered { html, minutes }) => (Some(html), Some(minutes)),
            None => (None, None),
        };

        Self {
            id,
            title: fm.title,
            banner_path: fm.banner_path,
            priority: fm.priority,
            tags: fm.tags,
            author: fm.author,
            date: fm.date,
            description: fm.description,
            content,
            time_estimate,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_record(&self) -> Record {
        metadata::normalize([
            ("id", required(&self.id)),
            ("title", required(&self.title)),
            ("bannerPath", field(&self.banner_path)),
            ("priority", required(&self.priority)),
            ("tags", required(&self.tags)),
            ("author", field(&self.author)),
            ("date", required(&self.date)),
            ("description", field(&self.description)),
            ("content", field(&self.content)),
            ("timeEstimate", field(&self.time_estimate)),
        ])
    }
}

impl Ranked for Post {
    fn priority(&self) -> i64 {
        self.priority
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl Dated for Post {
    fn date(&self) -> &str {
        &self.date
    }
}

impl Tagged for Post {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Serialize for Post {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}

/// A portfolio project
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub priority: i64,
    pub image_name: Option<String>,
    pub icon_name: Option<String>,
    /// Free-text technology list
    pub stack: Option<String>,
    pub github_url: Option<String>,
    pub access_url: Option<String>,
    pub content: Option<String>,
    pub adapt_logo_theme: Option<bool>,
}

impl Entity for Project {
    type FrontMatter = ProjectFrontMatter;

    const KIND: &'static str = "project";

    fn assemble(id: String, fm: ProjectFrontMatter, rendered: Option<Rendered>) -> Self {
        Self {
            id,
            title: fm.title,
            priority: fm.priority,
            image_name: fm.image_name,
            icon_name: fm.icon_name,
            stack: fm.stack,
            github_url: fm.github_url,
            access_url: fm.access_url,
            content: rendered.map(|r| r.html),
            adapt_logo_theme: fm.adapt_logo_theme,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn to_record(&self) -> Record {
        metadata::normalize([
            ("id", required(&self.id)),
            ("title", required(&self.title)),
            ("priority", required(&self.priority)),
            ("imageName", field(&self.image_name)),
            ("iconName", field(&self.icon_name)),
            ("stack", field(&self.stack)),
            ("githubUrl", field(&self.github_url)),
            ("accessUrl", field(&self.access_url)),
            ("content", field(&self.content)),
            ("adaptLogoTheme", field(&self.adapt_logo_theme)),
        ])
    }
}

impl Ranked for Project {
    fn priority(&self) -> i64 {
        self.priority
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl Serialize for Project {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}
