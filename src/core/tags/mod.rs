//! core/tags/mod.rs
//!
//! Artist tag extraction.
//! Public API:
//! - [`read_artists`] returns normalized artist names for a file, never an error.
//! - [`normalize_artists`] splits raw tag values into individual artists.
//! - [`TagSource`] is the seam between "read raw values" and "normalize";
//!   [`FileTags`] is the real on-disk implementation.

mod read;
mod split;

use std::path::Path;

use thiserror::Error;

pub use split::normalize_artists;

/// Why a file's tags could not be read. Never leaves this module's callers:
/// it is always mapped to the fallback artist.
#[derive(Debug, Error)]
pub enum TagError {
    #[error("open failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("id3: {0}")]
    Id3(#[from] id3::Error),

    #[error("probe failed: {0}")]
    Probe(#[from] symphonia::core::errors::Error),
}

/// Something that can produce raw artist tag values for a path.
#[cfg_attr(test, mockall::automock)]
pub trait TagSource {
    fn artist_values(&self, path: &Path) -> Result<Vec<String>, TagError>;
}

/// Reads tags from the files on disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileTags;

impl TagSource for FileTags {
    fn artist_values(&self, path: &Path) -> Result<Vec<String>, TagError> {
        read::read_artist_values(path)
    }
}

/// Normalized artist names for `path`.
///
/// Returns `(artists, failed)`:
/// - `artists` is never empty; `fallback` stands in when nothing usable was found
/// - `failed` is true when the tags could not be read at all
pub fn read_artists(source: &impl TagSource, path: &Path, fallback: &str) -> (Vec<String>, bool) {
    match source.artist_values(path) {
        Ok(values) => (normalize_artists(&values, fallback), false),
        Err(e) => {
            tracing::debug!("Tags unreadable for {}: {e}", path.display());
            (vec![fallback.to_string()], true)
        }
    }
}
