//! Completion dialog drawn over the window after organizing.

use iced::widget::{button, column, container, opaque, text};
use iced::{Alignment, Element, Length};

use super::super::state::Message;
use super::constants::{DIALOG_W, STEP_TEXT};

pub(crate) fn completion_dialog(message: &str) -> Element<'_, Message> {
    let card = container(
        column![
            text("Done").size(STEP_TEXT),
            text(message),
            button("OK").on_press(Message::DismissDialog),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .padding(20)
    .width(Length::Fixed(DIALOG_W))
    .style(container::rounded_box);

    // opaque: clicks don't fall through to the buttons underneath
    opaque(
        container(card)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
}
