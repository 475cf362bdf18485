//! Small pure helper functions used by the GUI.
//! - no UI widgets or state mutation

use std::path::Path;

use crate::core::types::{CopyFailure, Plan};

/// Just the file name for the preview log.
/// Ex: '/music/rock/song.mp3' -> 'song.mp3'
pub(crate) fn display_file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Log lines for the preview:
/// - "<artist>:" per artist
/// - "  <file name>" per file
/// - blank line after each artist
pub(crate) fn plan_preview_lines(plan: &Plan) -> Vec<String> {
    let mut lines = Vec::new();

    for (artist, files) in plan {
        lines.push(format!("{artist}:"));
        for file in files {
            lines.push(format!("  {}", display_file_name(file)));
        }
        lines.push(String::new());
    }

    lines
}

pub(crate) fn copy_failure_line(failure: &CopyFailure) -> String {
    format!(
        "Error copying {} to {}: {}",
        failure.source.display(),
        failure.artist_dir.display(),
        failure.error
    )
}

/// Status line after a preview.
pub(crate) fn preview_status(artists: usize, files: usize, tag_failures: usize) -> String {
    if tag_failures == 0 {
        format!("Planned {files} files across {artists} artists")
    } else {
        format!("Planned {files} files across {artists} artists ({tag_failures} tag read failures)")
    }
}
