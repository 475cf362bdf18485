//! core/copy.rs
//!
//! Organize step: copy every planned file into `<root>/Organized/<artist>/`.
//!
//! - Copies, never moves: sources stay where they are
//! - Existing destination files are overwritten
//! - A failed file is recorded and skipped, the rest keep going

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use super::config::Settings;
use super::error::{OrganizeError, Result};
use super::types::{CopyFailure, CopyReport, Plan};

pub fn organize(root: &Path, plan: &Plan, settings: &Settings) -> Result<CopyReport> {
    let dest_root = root.join(&settings.output_dir_name);
    fs::create_dir_all(&dest_root).map_err(|e| OrganizeError::io(&dest_root, e))?;

    let mut report = CopyReport {
        dest_root: dest_root.clone(),
        ..CopyReport::default()
    };

    for (artist, files) in plan {
        let artist_dir = dest_root.join(artist_dir_name(artist));

        // If the folder can't be made, every file for this artist fails with that reason.
        let dir_result = fs::create_dir_all(&artist_dir);

        for source in files {
            let outcome = match &dir_result {
                Ok(()) => copy_preserving_mtime(source, &artist_dir),
                Err(e) => Err(io::Error::new(e.kind(), e.to_string())),
            };

            match outcome {
                Ok(()) => report.copied += 1,
                Err(e) => {
                    tracing::warn!(
                        "Copy failed: {} -> {}: {e}",
                        source.display(),
                        artist_dir.display()
                    );
                    report.failures.push(CopyFailure {
                        source: source.clone(),
                        artist_dir: artist_dir.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }
    }

    tracing::info!(
        "Copied {} files into {} ({} failures)",
        report.copied,
        dest_root.display(),
        report.failures.len()
    );

    Ok(report)
}

/// Copy `source` into `dir` under its own file name, keeping its modified time.
fn copy_preserving_mtime(source: &Path, dir: &Path) -> io::Result<()> {
    let file_name = source.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("no file name in {}", source.display()),
        )
    })?;
    let dest = dir.join(file_name);

    // A rescan of the output folder plans files onto themselves; fs::copy would truncate them.
    if is_same_file(source, &dest) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "source and destination are the same file",
        ));
    }

    fs::copy(source, &dest)?;

    // Timestamp is best effort; the bytes already made it.
    if let Ok(modified) = fs::metadata(source).and_then(|m| m.modified()) {
        if let Err(e) = File::options()
            .write(true)
            .open(&dest)
            .and_then(|f| f.set_modified(modified))
        {
            tracing::debug!("Could not keep mtime on {}: {e}", dest.display());
        }
    }

    Ok(())
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Folder name for an artist. Keeps every copy inside the output folder:
/// - path separators and characters Windows rejects become `_`
/// - "", "." and ".." become `_`
///
/// Not injective: `AC/DC` and `AC\DC` both give `AC_DC`, `Why?` and `Why*` both
/// give `Why_`. Those artists share one folder and their files are merged.
pub fn artist_dir_name(artist: &str) -> PathBuf {
    let cleaned: String = artist
        .chars()
        .map(|c| match c {
            '/' | '\\' | '<' | '>' | ':' | '"' | '|' | '?' | '*' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let cleaned = cleaned.trim_end_matches([' ', '.']);
    match cleaned.trim() {
        "" => PathBuf::from("_"),
        name => PathBuf::from(name),
    }
}
