use iced::Task;
use std::path::{Path, PathBuf};

use super::super::state::{Message, Organizer};

pub(crate) fn folder_input_changed(state: &mut Organizer, s: String) -> Task<Message> {
    state.folder_input = s;
    Task::none()
}

pub(crate) fn choose_folder_pressed(state: &mut Organizer) -> Task<Message> {
    if state.busy.is_some() {
        return Task::none();
    }

    let input = state.folder_input.trim();
    if input.is_empty() {
        return Task::none();
    }

    let p = PathBuf::from(input);

    // Validate: user must pick an existing directory.
    if !Path::new(input).is_dir() {
        state.status = format!("Not a folder: {}", p.display());
        return Task::none();
    }

    // New folder = old plan no longer applies.
    state.plan.clear();
    state.log(format!("Selected folder: {}", p.display()));
    state.status = "Folder selected. Preview the plan next.".to_string();
    tracing::info!("Selected folder {}", p.display());

    state.folder = Some(p);
    Task::none()
}
