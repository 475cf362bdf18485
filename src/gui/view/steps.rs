//! Step 1 (folder) and step 2 (preview / organize) controls.

use iced::widget::{Column, button, column, row, text, text_input};
use iced::{Alignment, Length};

use super::super::state::{Job, Message, Organizer};
use super::constants::{BUTTON_W, STEP_TEXT};

pub(crate) fn build_folder_step(state: &Organizer) -> Column<'_, Message> {
    let folder_input = text_input("Music folder path (ex: D:\\Music)", &state.folder_input)
        .on_input(Message::FolderInputChanged)
        .on_submit(Message::ChooseFolderPressed)
        .width(Length::Fill);

    // No on_press = disabled while a job runs.
    let choose_btn = if state.busy.is_some() {
        button("Use Folder")
    } else {
        button("Use Folder").on_press(Message::ChooseFolderPressed)
    };

    let current = match &state.folder {
        Some(p) => format!("Current: {}", p.display()),
        None => "No folder selected".to_string(),
    };

    column![
        text("Step 1: Choose your music folder").size(STEP_TEXT),
        row![folder_input, choose_btn.width(Length::Fixed(BUTTON_W))]
            .spacing(8)
            .align_y(Alignment::Center),
        text(current).size(12),
    ]
    .spacing(8)
}

pub(crate) fn build_plan_step(state: &Organizer) -> Column<'_, Message> {
    let preview_btn = match state.busy {
        Some(Job::Previewing) => button("Scanning..."),
        _ if state.can_preview() => button("Preview Plan").on_press(Message::PreviewPressed),
        _ => button("Preview Plan"),
    };

    let organize_btn = match state.busy {
        Some(Job::Organizing) => button("Copying..."),
        _ if state.can_organize() => button("Organize Now").on_press(Message::OrganizePressed),
        _ => button("Organize Now"),
    };

    column![
        text("Step 2: Preview and organize by artist").size(STEP_TEXT),
        row![
            preview_btn.width(Length::Fixed(BUTTON_W)),
            organize_btn.width(Length::Fixed(BUTTON_W)),
        ]
        .spacing(12),
    ]
    .spacing(8)
}
