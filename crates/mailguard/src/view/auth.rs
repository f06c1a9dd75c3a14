//! Authentication view.
//!
//! Centered card with a single masked token field.

use iced::widget::{Space, button, column, container, text, text_input};
use iced::{Alignment, Element, Length};

use crate::message::{AuthMessage, Message};
use crate::model::AuthState;
use crate::style::widgets;
use crate::style::widgets::palette;

/// Render the authentication view.
pub fn view_auth(state: &AuthState) -> Element<'_, Message> {
    let p = palette::current();

    let title = text("MailGuard").size(32).color(p.primary);

    let subtitle = text("Enter your access token to continue")
        .size(14)
        .color(p.text_secondary);

    let token_input = text_input("Access token", &state.token)
        .on_input(|s| Message::Auth(AuthMessage::TokenChanged(s)))
        .on_submit(Message::Auth(AuthMessage::Submit))
        .padding(12)
        .secure(true)
        .style(widgets::input_style);

    let submit = button(
        text(if state.is_authenticating {
            "Authenticating..."
        } else {
            "Authenticate"
        })
        .size(14),
    )
    .on_press_maybe(state.can_submit().then_some(Message::Auth(AuthMessage::Submit)))
    .padding([12, 24])
    .width(Length::Fill)
    .style(widgets::primary_button_style);

    let mut card = column![
        title,
        subtitle,
        Space::new().height(20),
        token_input,
        Space::new().height(8),
        submit,
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    if let Some(error) = &state.error {
        card = card.push(Space::new().height(8));
        card = card.push(
            container(text(error).size(13))
                .padding(12)
                .width(Length::Fill)
                .style(widgets::error_banner_style),
        );
    }

    let card = container(card)
        .padding(32)
        .max_width(420)
        .style(widgets::card_style);

    container(card)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(widgets::screen_style)
        .into()
}
