//! Blocking screen shown while a restored session is checked against
//! the backend.

use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::style::widgets;
use crate::style::widgets::palette;

/// Render the verification splash.
pub fn view_verifying<'a>() -> Element<'a, Message> {
    let p = palette::current();

    let content = column![
        text("MailGuard").size(32).color(p.primary),
        text("Restoring your session...")
            .size(14)
            .color(p.text_secondary),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(widgets::screen_style)
        .into()
}
