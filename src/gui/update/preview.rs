//! gui/update/preview.rs
//! Preview lifecycle: kick off scan + plan on a worker, then log the result.

use iced::Task;
use std::path::PathBuf;

use crate::core;
use crate::core::types::ScanSummary;

use super::super::state::{Job, Message, Organizer};
use super::super::util::{plan_preview_lines, preview_status};
use super::util::spawn_blocking;

pub(crate) fn preview_pressed(state: &mut Organizer) -> Task<Message> {
    if state.busy.is_some() {
        return Task::none();
    }

    let Some(root) = state.folder.clone() else {
        state.status = "Choose a folder first.".to_string();
        return Task::none();
    };

    state.busy = Some(Job::Previewing);
    state.status = "Scanning...".to_string();
    state.log.clear();
    state.plan.clear();

    let settings = state.settings.clone();

    Task::perform(
        spawn_blocking(move || core::preview(&root, &settings).map_err(|e| e.to_string())),
        Message::PreviewFinished,
    )
}

pub(crate) fn preview_finished(
    state: &mut Organizer,
    result: Result<(ScanSummary, Option<PathBuf>), String>,
) -> Task<Message> {
    state.busy = None;

    match result {
        Ok((summary, plan_path)) => {
            if summary.plan.is_empty() {
                state.log("No supported music files found.");
                state.status = "Nothing to organize.".to_string();
                return Task::none();
            }

            state.log("Preview of artist-wise categorization:");
            state.log("");
            for line in plan_preview_lines(&summary.plan) {
                state.log(line);
            }

            if let Some(path) = plan_path {
                state.log(format!("Plan saved to: {}", path.display()));
            }

            state.status = preview_status(
                summary.plan.len(),
                summary.files_scanned,
                summary.tag_failures,
            );
            state.plan = summary.plan;
        }
        Err(e) => {
            state.log(format!("Preview failed: {e}"));
            state.status = format!("Preview error: {e}");
            tracing::error!("Preview failed: {e}");
        }
    }

    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Plan;

    fn chosen_state() -> Organizer {
        Organizer {
            folder: Some(PathBuf::from("/music")),
            ..Organizer::default()
        }
    }

    fn summary_with(plan: Plan) -> ScanSummary {
        let files_scanned = plan.values().map(Vec::len).sum();
        ScanSummary {
            plan,
            files_scanned,
            tag_failures: 0,
        }
    }

    #[test]
    fn test_preview_needs_a_folder() {
        let mut state = Organizer::default();
        let _ = preview_pressed(&mut state);

        assert!(state.busy.is_none());
        assert_eq!(state.status, "Choose a folder first.");
    }

    #[test]
    fn test_preview_marks_busy_and_clears_log() {
        let mut state = chosen_state();
        state.log("Selected folder: /music");

        let _ = preview_pressed(&mut state);

        assert_eq!(state.busy, Some(Job::Previewing));
        assert!(state.log.is_empty());
        assert!(!state.can_preview());
        assert!(!state.can_organize());
    }

    #[test]
    fn test_preview_ignored_while_busy() {
        let mut state = chosen_state();
        state.busy = Some(Job::Organizing);
        state.log("kept");

        let _ = preview_pressed(&mut state);

        assert_eq!(state.busy, Some(Job::Organizing));
        assert_eq!(state.log, vec!["kept"]);
    }

    #[test]
    fn test_finished_preview_logs_plan_and_enables_organize() {
        let mut state = chosen_state();
        state.busy = Some(Job::Previewing);

        let mut plan = Plan::new();
        plan.insert("X".to_string(), vec![PathBuf::from("/music/a.mp3")]);
        plan.insert("Y".to_string(), vec![PathBuf::from("/music/b.flac")]);

        let plan_path = PathBuf::from("/music/music_organization_plan.txt");
        let _ = preview_finished(&mut state, Ok((summary_with(plan), Some(plan_path))));

        assert!(state.busy.is_none());
        assert!(state.can_organize());
        assert_eq!(state.plan.len(), 2);
        assert_eq!(state.log[0], "Preview of artist-wise categorization:");
        assert!(state.log.contains(&"X:".to_string()));
        assert!(state.log.contains(&"  a.mp3".to_string()));
        assert!(state.log.contains(&"  b.flac".to_string()));
        assert!(state.log.last().unwrap().starts_with("Plan saved to: "));
    }

    #[test]
    fn test_empty_preview_keeps_organize_disabled() {
        let mut state = chosen_state();
        state.busy = Some(Job::Previewing);

        let _ = preview_finished(&mut state, Ok((ScanSummary::default(), None)));

        assert!(!state.can_organize());
        assert_eq!(state.log, vec!["No supported music files found."]);
    }

    #[test]
    fn test_failed_preview_is_logged() {
        let mut state = chosen_state();
        state.busy = Some(Job::Previewing);

        let _ = preview_finished(&mut state, Err("Not a folder: /music".to_string()));

        assert!(state.busy.is_none());
        assert!(!state.can_organize());
        assert_eq!(state.log, vec!["Preview failed: Not a folder: /music"]);
    }
}
