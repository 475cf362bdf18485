//! GUI renderer (reads state, produces widgets; no mutation).

mod constants;
mod dialog;
mod log;
mod steps;

use iced::widget::{column, stack, text};
use iced::{Element, Length};

use super::state::{Message, Organizer};
use constants::{PADDING, SECTION_SPACING, STATUS_TEXT};

pub(crate) use constants::{WINDOW_H, WINDOW_W};

pub(crate) fn view(state: &Organizer) -> Element<'_, Message> {
    let content = column![
        steps::build_folder_step(state),
        steps::build_plan_step(state),
        text(&state.status).size(STATUS_TEXT),
        log::build_log_panel(state),
    ]
    .spacing(SECTION_SPACING)
    .padding(PADDING)
    .width(Length::Fill)
    .height(Length::Fill);

    match &state.dialog {
        Some(message) => stack![content, dialog::completion_dialog(message)].into(),
        None => content.into(),
    }
}
