//! Content loader - loads posts and projects from a content directory

use std::collections::HashMap;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::frontmatter;
use super::post::{Entity, Rendered};
use super::reading_time::estimate_minutes;
use super::MarkdownRenderer;
use crate::error::{Error, Result};
use crate::i18n::PathParams;

/// File extensions treated as content
const CONTENT_EXTENSIONS: [&str; 2] = ["md", "markdown"];

/// Loads one collection of entities from a flat directory
pub struct ContentLoader<'a, T> {
    dir: PathBuf,
    renderer: &'a MarkdownRenderer,
    kind: PhantomData<T>,
}

impl<'a, T: Entity> ContentLoader<'a, T> {
    /// Create a loader over `dir`, rendering full loads with `renderer`
    pub fn new<P: AsRef<Path>>(dir: P, renderer: &'a MarkdownRenderer) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            renderer,
            kind: PhantomData,
        }
    }

    /// Load every entity with metadata only, no rendering
    pub fn load_summaries(&self) -> Result<Vec<T>> {
        let entities = self
            .content_files()?
            .into_iter()
            .map(|(id, path)| self.load_file(id, &path, false))
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(
            "Loaded {} {} summaries from {:?}",
            entities.len(),
            T::KIND,
            self.dir
        );
        Ok(entities)
    }

    /// Load a single entity with rendered content
    pub fn load_full(&self, id: &str) -> Result<T> {
        let path = self.find_file(id)?;
        self.load_file(id.to_string(), &path, true)
    }

    /// One path parameter per content file, for static path declaration
    pub fn ids(&self) -> Result<Vec<PathParams>> {
        Ok(self
            .content_files()?
            .into_iter()
            .map(|(id, _)| PathParams { id })
            .collect())
    }

    /// List content files as `(id, path)`, in file name order.
    ///
    /// Entries are filtered by extension before anything is resolved, so
    /// a broken link to a non-content file is skipped. Sub-directories are
    /// skipped too.
    fn content_files(&self) -> Result<Vec<(String, PathBuf)>> {
        self.ensure_dir()?;

        let mut files = Vec::new();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();

        for entry in WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(self.dir.as_path()).to_path_buf();
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("symlink loop"));
                Error::load(path, source)
            })?;

            let path = entry.path();
            if !is_content_file(path) {
                tracing::debug!("Skipping non-content entry {:?}", path);
                continue;
            }
            if !is_regular_file(path)? {
                continue;
            }

            let id = id_from_path(path);
            if let Some(first) = seen.insert(id.clone(), path.to_path_buf()) {
                return Err(Error::DuplicateId {
                    id,
                    first,
                    second: path.to_path_buf(),
                });
            }
            files.push((id, path.to_path_buf()));
        }

        Ok(files)
    }

    /// Content file for `id`, held to the same rules as `content_files`
    fn find_file(&self, id: &str) -> Result<PathBuf> {
        if id.is_empty() || id.contains(['/', '\\']) || id == ".." {
            return Err(Error::InvalidArgument(format!("invalid {} id '{}'", T::KIND, id)));
        }
        self.ensure_dir()?;

        let mut candidates = Vec::new();
        for ext in CONTENT_EXTENSIONS {
            let path = self.dir.join(format!("{}.{}", id, ext));
            if is_regular_file(&path)? {
                candidates.push(path);
            }
        }

        let mut candidates = candidates.into_iter();
        match (candidates.next(), candidates.next()) {
            (Some(first), Some(second)) => Err(Error::DuplicateId {
                id: id.to_string(),
                first,
                second,
            }),
            (Some(path), None) => Ok(path),
            _ => Err(Error::NotFound {
                kind: T::KIND,
                id: id.to_string(),
            }),
        }
    }

    fn ensure_dir(&self) -> Result<()> {
        if self.dir.is_dir() {
            return Ok(());
        }
        Err(Error::load(
            &self.dir,
            std::io::Error::new(std::io::ErrorKind::NotFound, "content directory not found"),
        ))
    }

    /// Load a single entity from a file
    fn load_file(&self, id: String, path: &Path, full: bool) -> Result<T> {
        let content = fs::read_to_string(path).map_err(|e| Error::load(path, e))?;
        let (metadata, body) =
            frontmatter::split(&content).map_err(|e| Error::parse(path, e.to_string()))?;
        let front_matter: T::FrontMatter =
            frontmatter::extract(metadata).map_err(|e| Error::parse(path, e.to_string()))?;

        let rendered = full.then(|| {
            let html = self.renderer.render(body);
            let minutes = estimate_minutes(&html);
            Rendered { html, minutes }
        });

        let entity = T::assemble(id, front_matter, rendered);
        tracing::debug!("Loaded {} '{}' from {:?}", T::KIND, entity.id(), path);
        Ok(entity)
    }
}

/// Check if a file is a content file
fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| CONTENT_EXTENSIONS.contains(&e))
        .unwrap_or(false)
}

/// Whether `path` is a file, following links.
///
/// Missing paths and directories are `false`; a broken link is an error.
fn is_regular_file(path: &Path) -> Result<bool> {
    match fs::symlink_metadata(path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::load(path, e)),
        Ok(meta) if meta.file_type().is_symlink() => fs::metadata(path)
            .map(|target| target.is_file())
            .map_err(|e| Error::load(path, e)),
        Ok(meta) => Ok(meta.is_file()),
    }
}

/// Entity id: the file name without its extension
fn id_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
