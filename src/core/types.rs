//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These structs should be “boring bags of data”
//! - No GUI code
//! - No filesystem code
//! - No tag parsing code

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Bucket for files whose artist could not be read.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Artist name -> files credited to that artist.
///
/// - BTreeMap so the preview and the plan file list artists in sorted order.
/// - A file crediting several artists shows up under each of them.
pub type Plan = BTreeMap<String, Vec<PathBuf>>;

/// Result of one preview run.
#[derive(Debug, Clone, Default)]
pub struct ScanSummary {
    pub plan: Plan,

    /// Supported audio files found under the root.
    pub files_scanned: usize,

    /// Files that fell back to "Unknown Artist" because tags were unreadable.
    pub tag_failures: usize,
}

/// One file that could not be copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFailure {
    pub source: PathBuf,
    pub artist_dir: PathBuf,
    pub error: String,
}

/// Outcome of the organize step.
#[derive(Debug, Clone, Default)]
pub struct CopyReport {
    pub dest_root: PathBuf,
    pub copied: usize,
    pub failures: Vec<CopyFailure>,
}
