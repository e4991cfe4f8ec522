//! Error types for the content pipeline

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading, ordering or serializing content.
///
/// Every variant is fatal for the build: nothing here is retried and no
/// partially loaded collection is ever returned.
#[derive(Error, Debug)]
pub enum Error {
    /// Front-matter of a single file could not be split, parsed or mapped
    /// onto the entity schema.
    #[error("Parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// A directory or file could not be read.
    #[error("Failed to load {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No content file exists for the requested id.
    #[error("No {kind} found with id '{id}'")]
    NotFound { kind: &'static str, id: String },

    /// Two files of one collection derive the same id.
    #[error("Duplicate id '{id}': {first} and {second}")]
    DuplicateId {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// A caller passed an argument outside the accepted domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Create a new parse error.
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new load error.
    pub fn load(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Load {
            path: path.into(),
            source,
        }
    }
}
