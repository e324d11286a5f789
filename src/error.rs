//! Error types for site generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a build
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Invalid date {date:?} (expected YYYY-MM-DD): {source}")]
    InvalidDate {
        date: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Cannot derive a slug from {0:?}")]
    InvalidFilename(PathBuf),

    #[error("Empty slug header in {0:?}")]
    EmptySlug(PathBuf),

    #[error("Post {slug:?} not found among posts tagged {tag:?}")]
    NotInGroup { slug: String, tag: Option<String> },

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Glob error: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid params file {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SiteError {
    /// Attach a path to an IO error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SiteError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
