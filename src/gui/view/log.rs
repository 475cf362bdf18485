//! Scrolling log area (monospace, sticks to the newest line).

use iced::widget::{Container, column, container, scrollable, text};
use iced::{Font, Length};

use super::super::state::{Message, Organizer};
use super::constants::LOG_TEXT;

pub(crate) fn build_log_panel(state: &Organizer) -> Container<'_, Message> {
    let mut lines = column![].spacing(2);
    for line in &state.log {
        lines = lines.push(text(line).font(Font::MONOSPACE).size(LOG_TEXT));
    }

    let log = scrollable(lines.width(Length::Fill))
        .anchor_bottom()
        .width(Length::Fill)
        .height(Length::Fill);

    container(log)
        .padding(8)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::bordered_box)
}
