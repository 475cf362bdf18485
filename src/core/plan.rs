//! core/plan.rs
//!
//! Preview step: group every supported file under each artist it credits,
//! then render / save that grouping as a plain-text summary.

use std::path::{Path, PathBuf};

use super::config::Settings;
use super::error::{OrganizeError, Result};
use super::library;
use super::tags::{self, TagSource};
use super::types::{Plan, ScanSummary};

/// Scan `root` and group files by artist.
///
/// - Paths in the plan are absolute
/// - Unreadable tags never fail the scan (they land under the fallback artist)
pub fn build_plan(root: &Path, settings: &Settings, source: &impl TagSource) -> Result<ScanSummary> {
    let root = std::path::absolute(root).map_err(|e| OrganizeError::io(root, e))?;
    let paths = library::scan_audio_files(&root, settings)?;

    let mut summary = ScanSummary {
        files_scanned: paths.len(),
        ..ScanSummary::default()
    };

    for path in paths {
        let (artists, failed) = tags::read_artists(source, &path, &settings.unknown_artist);
        if failed {
            summary.tag_failures += 1;
        }

        for artist in artists {
            summary.plan.entry(artist).or_default().push(path.clone());
        }
    }

    tracing::info!(
        "Planned {} files across {} artists ({} tag read failures)",
        summary.files_scanned,
        summary.plan.len(),
        summary.tag_failures
    );

    Ok(summary)
}

/// Plan file text:
///
/// ```text
/// Artist:
///   /full/path/one.mp3
///   /full/path/two.flac
///
/// ```
pub fn render_plan(plan: &Plan) -> String {
    let mut out = String::new();

    for (artist, files) in plan {
        out.push_str(&format!("{artist}:\n"));
        for file in files {
            out.push_str(&format!("  {}\n", file.display()));
        }
        out.push('\n');
    }

    out
}

/// Write the plan file into `root`. Returns where it went.
pub fn write_plan(root: &Path, plan: &Plan, settings: &Settings) -> Result<PathBuf> {
    let plan_path = root.join(&settings.plan_file_name);
    std::fs::write(&plan_path, render_plan(plan)).map_err(|e| OrganizeError::io(&plan_path, e))?;

    tracing::info!("Plan saved to {}", plan_path.display());
    Ok(plan_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tags::{MockTagSource, TagError};
    use crate::core::types::UNKNOWN_ARTIST;
    use std::fs::{self, File};
    use tempfile::TempDir;

    /// Tag source that answers by file name.
    fn source_by_name(table: &'static [(&'static str, &'static str)]) -> MockTagSource {
        let mut source = MockTagSource::new();
        source.expect_artist_values().returning(move |path| {
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            match table.iter().find(|(file, _)| *file == name) {
                Some((_, artist)) => Ok(vec![artist.to_string()]),
                None => Err(TagError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "no tag",
                ))),
            }
        });
        source
    }

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_plan_groups_by_every_artist() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("a.mp3")).unwrap();
        File::create(temp_dir.path().join("b.flac")).unwrap();
        File::create(temp_dir.path().join("c.txt")).unwrap();

        let source = source_by_name(&[("a.mp3", "X"), ("b.flac", "Y; Z"), ("c.txt", "Nope")]);
        let summary = build_plan(temp_dir.path(), &Settings::default(), &source).unwrap();

        assert_eq!(summary.plan.len(), 3);
        assert_eq!(names(&summary.plan["X"]), vec!["a.mp3"]);
        assert_eq!(names(&summary.plan["Y"]), vec!["b.flac"]);
        assert_eq!(names(&summary.plan["Z"]), vec!["b.flac"]);
        assert_eq!(summary.files_scanned, 2);
        assert_eq!(summary.tag_failures, 0);
    }

    #[test]
    fn test_plan_paths_are_absolute() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("a.mp3")).unwrap();

        let source = source_by_name(&[("a.mp3", "X")]);
        let summary = build_plan(temp_dir.path(), &Settings::default(), &source).unwrap();

        assert!(summary.plan["X"][0].is_absolute());
    }

    #[test]
    fn test_unreadable_files_go_to_unknown_artist() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("a.mp3")).unwrap();
        File::create(temp_dir.path().join("mystery.wav")).unwrap();

        let source = source_by_name(&[("a.mp3", "X")]);
        let summary = build_plan(temp_dir.path(), &Settings::default(), &source).unwrap();

        assert_eq!(names(&summary.plan[UNKNOWN_ARTIST]), vec!["mystery.wav"]);
        assert_eq!(summary.tag_failures, 1);
    }

    #[test]
    fn test_empty_or_unsupported_folder_gives_empty_plan() {
        let temp_dir = TempDir::new().unwrap();
        let source = source_by_name(&[]);
        let summary = build_plan(temp_dir.path(), &Settings::default(), &source).unwrap();
        assert!(summary.plan.is_empty());

        File::create(temp_dir.path().join("notes.txt")).unwrap();
        File::create(temp_dir.path().join("cover.jpg")).unwrap();
        let summary = build_plan(temp_dir.path(), &Settings::default(), &source).unwrap();
        assert!(summary.plan.is_empty());
        assert_eq!(summary.files_scanned, 0);
    }

    #[test]
    fn test_render_plan_format() {
        let mut plan = Plan::new();
        plan.insert(
            "X".to_string(),
            vec![PathBuf::from("/music/a.mp3"), PathBuf::from("/music/sub/c.m4a")],
        );
        plan.insert("Y".to_string(), vec![PathBuf::from("/music/b.flac")]);

        let expected = "X:\n  /music/a.mp3\n  /music/sub/c.m4a\n\nY:\n  /music/b.flac\n\n";
        assert_eq!(render_plan(&plan), expected);
    }

    #[test]
    fn test_write_plan_creates_file_at_root() {
        let temp_dir = TempDir::new().unwrap();
        let mut plan = Plan::new();
        plan.insert("X".to_string(), vec![temp_dir.path().join("a.mp3")]);

        let written = write_plan(temp_dir.path(), &plan, &Settings::default()).unwrap();

        assert_eq!(written, temp_dir.path().join("music_organization_plan.txt"));
        let contents = fs::read_to_string(&written).unwrap();
        assert!(contents.starts_with("X:\n  "));
        assert!(contents.ends_with("a.mp3\n\n"));
    }
}
