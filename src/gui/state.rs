//! GUI state + messages.
//! Pure data definitions used by update/ + view/.

use std::path::PathBuf;

use crate::core::config::Settings;
use crate::core::types::{CopyReport, Plan, ScanSummary};

/// Which background job is running. Only one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Job {
    Previewing,
    Organizing,
}

/// App state
pub(crate) struct Organizer {
    pub status: String,
    pub busy: Option<Job>,

    // Step 1: folder
    pub folder_input: String,
    pub folder: Option<PathBuf>,

    // Step 2: plan from the last preview (empty = nothing to organize)
    pub plan: Plan,

    // Log area, one entry per line
    pub log: Vec<String>,

    // Completion dialog text, shown until dismissed
    pub dialog: Option<String>,

    pub settings: Settings,
}

impl Default for Organizer {
    fn default() -> Self {
        Self {
            status: "Choose your music folder.".to_string(),
            busy: None,

            folder_input: String::new(),
            folder: None,

            plan: Plan::new(),

            log: Vec::new(),
            dialog: None,

            settings: Settings::default(),
        }
    }
}

impl Organizer {
    pub(crate) fn can_preview(&self) -> bool {
        self.busy.is_none() && self.folder.is_some()
    }

    pub(crate) fn can_organize(&self) -> bool {
        self.busy.is_none() && self.folder.is_some() && !self.plan.is_empty()
    }

    pub(crate) fn log(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
    }
}

/// Message = “something happened”.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    // Step 1
    FolderInputChanged(String),
    ChooseFolderPressed,

    // Step 2
    PreviewPressed,
    PreviewFinished(Result<(ScanSummary, Option<PathBuf>), String>),

    // Step 3
    OrganizePressed,
    OrganizeFinished(Result<CopyReport, String>),

    DismissDialog,
}
