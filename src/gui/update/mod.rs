//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Message, Organizer};

mod folder;
mod organize;
mod preview;
mod util;

pub(crate) fn update(state: &mut Organizer, message: Message) -> Task<Message> {
    match message {
        // Step 1
        Message::FolderInputChanged(s) => folder::folder_input_changed(state, s),
        Message::ChooseFolderPressed => folder::choose_folder_pressed(state),

        // Step 2
        Message::PreviewPressed => preview::preview_pressed(state),
        Message::PreviewFinished(result) => preview::preview_finished(state, result),

        // Step 3
        Message::OrganizePressed => organize::organize_pressed(state),
        Message::OrganizeFinished(result) => organize::organize_finished(state, result),
        Message::DismissDialog => organize::dismiss_dialog(state),
    }
}
