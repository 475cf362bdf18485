//! Errors returned by the core (scan, plan file, organize).
//!
//! Tag read failures are NOT here: they never leave `core::tags`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrganizeError {
    /// Selected path is missing or is a file.
    #[error("Not a folder: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Directory walk could not continue.
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl OrganizeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, OrganizeError>;
