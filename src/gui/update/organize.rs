//! gui/update/organize.rs
//! Copy step: run the previewed plan on a worker, then report per-file failures.

use iced::Task;

use crate::core;
use crate::core::types::CopyReport;

use super::super::state::{Job, Message, Organizer};
use super::super::util::copy_failure_line;
use super::util::spawn_blocking;

pub(crate) fn organize_pressed(state: &mut Organizer) -> Task<Message> {
    if !state.can_organize() {
        return Task::none();
    }

    let Some(root) = state.folder.clone() else {
        return Task::none();
    };

    state.busy = Some(Job::Organizing);
    state.status = "Copying...".to_string();

    let plan = state.plan.clone();
    let settings = state.settings.clone();

    Task::perform(
        spawn_blocking(move || core::organize(&root, &plan, &settings).map_err(|e| e.to_string())),
        Message::OrganizeFinished,
    )
}

pub(crate) fn organize_finished(
    state: &mut Organizer,
    result: Result<CopyReport, String>,
) -> Task<Message> {
    state.busy = None;

    match result {
        Ok(report) => {
            for failure in &report.failures {
                state.log(copy_failure_line(failure));
            }

            state.log("");
            state.log("All songs copied into their respective artist folders.");

            state.status = if report.failures.is_empty() {
                format!("Copied {} files into {}", report.copied, report.dest_root.display())
            } else {
                format!(
                    "Copied {} files into {} ({} failed)",
                    report.copied,
                    report.dest_root.display(),
                    report.failures.len()
                )
            };

            state.dialog = Some(if report.failures.is_empty() {
                "Music successfully organized by artist!".to_string()
            } else {
                format!(
                    "Music organized by artist, {} files could not be copied (see log).",
                    report.failures.len()
                )
            });
        }
        Err(e) => {
            state.log(format!("Organize failed: {e}"));
            state.status = format!("Organize error: {e}");
            tracing::error!("Organize failed: {e}");
        }
    }

    Task::none()
}

pub(crate) fn dismiss_dialog(state: &mut Organizer) -> Task<Message> {
    state.dialog = None;
    Task::none()
}
