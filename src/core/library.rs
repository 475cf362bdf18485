use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::config::Settings;
use super::error::{OrganizeError, Result};

/// Recursively collect supported audio files under `root`.
///
/// - Sorted by file name per directory, so plans are reproducible
/// - Symlinks are not followed
/// - An unreadable entry below the root is logged and skipped
pub fn scan_audio_files(root: &Path, settings: &Settings) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(OrganizeError::NotADirectory(root.to_path_buf()));
    }

    let mut out = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };

        if entry.file_type().is_file() && is_supported(entry.path(), settings) {
            out.push(entry.into_path());
        }
    }

    tracing::debug!("Found {} audio files under {}", out.len(), root.display());
    Ok(out)
}

// A file named just ".mp3" has no extension to `Path::extension` and is skipped.
fn is_supported(path: &Path, settings: &Settings) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| settings.is_supported_extension(ext))
        .unwrap_or(false)
}
