//! core/mod.rs
//!
//! The brain of the app:
//! - Discover supported audio files (filesystem walk)
//! - Read artist tags and group files by artist (the plan)
//! - Save the plan summary, then copy files per artist
//!
//! The pipeline is explicit and every stage is a plain function:
//!   (A) library::scan_audio_files(root) -> Vec<PathBuf>
//!   (B) plan::build_plan(root) -> ScanSummary (A + tags, grouped)
//!   (C) plan::write_plan(root, plan) -> plan file
//!   (D) copy::organize(root, plan) -> CopyReport
//!
//! No GUI types in here. The GUI calls the two entry points below from a
//! background thread and renders what comes back.

pub mod config;
pub mod copy;
pub mod error;
pub mod library;
pub mod plan;
pub mod tags;
pub mod types;

use std::path::{Path, PathBuf};

use config::Settings;
use error::Result;
use tags::FileTags;
use types::{CopyReport, Plan, ScanSummary};

/// Preview: build the plan from real file tags and, when it has any artists,
/// save the plan file. Returns the summary plus where the file went.
pub fn preview(root: &Path, settings: &Settings) -> Result<(ScanSummary, Option<PathBuf>)> {
    let summary = plan::build_plan(root, settings, &FileTags)?;

    if summary.plan.is_empty() {
        tracing::info!("No supported music files under {}", root.display());
        return Ok((summary, None));
    }

    let plan_path = plan::write_plan(root, &summary.plan, settings)?;
    Ok((summary, Some(plan_path)))
}

/// Organize: copy files per the previewed plan.
pub fn organize(root: &Path, plan: &Plan, settings: &Settings) -> Result<CopyReport> {
    copy::organize(root, plan, settings)
}
