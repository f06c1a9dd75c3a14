//! Email analysis form view.
//!
//! Text area with readiness banners, sample loaders, and the character
//! counter under the input.

use iced::widget::{Space, button, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length};

use mailguard_core::{EngineStatus, MAX_EMAIL_CHARS};

use crate::message::{Message, SampleEmail, ScanMessage};
use crate::model::{Readiness, ScanState};
use crate::style::widgets;
use crate::style::widgets::palette;

/// Render the scan form.
pub fn view_scan(state: &ScanState) -> Element<'_, Message> {
    let p = palette::current();

    let title = text("Email Analysis").size(28).color(p.text_primary);
    let subtitle = text("Paste your email content below for security analysis")
        .size(14)
        .color(p.text_secondary);

    let readiness_banner = create_readiness_banner(state);
    let error_banner = create_error_banner(state);

    let email_input = text_input("Paste the email content here...", &state.email_text)
        .on_input(|s| Message::Scan(ScanMessage::EmailTextChanged(s)))
        .padding(12)
        .style(widgets::input_style);

    let counter_color = if state.char_count() > MAX_EMAIL_CHARS {
        p.accent_red
    } else {
        p.text_muted
    };
    let counter = text(state.char_counter()).size(12).color(counter_color);

    let samples = create_sample_row(state);

    let submit = button(
        text(if state.is_scanning {
            "Analyzing..."
        } else {
            "Analyze Email"
        })
        .size(14),
    )
    .on_press_maybe(state.can_submit().then_some(Message::Scan(ScanMessage::Submit)))
    .padding([12, 24])
    .width(Length::Fill)
    .style(widgets::primary_button_style);

    let logout = button(text("Logout").size(13))
        .on_press(Message::LogoutRequested)
        .padding([8, 16])
        .style(widgets::danger_button_style);

    let header = row![
        column![title, subtitle].spacing(4),
        Space::new().width(Length::Fill),
        logout,
    ]
    .align_y(Alignment::Center);

    let content = column![
        header,
        readiness_banner,
        error_banner,
        email_input,
        counter,
        Space::new().height(8),
        text("Try sample emails:").size(13).color(p.text_secondary),
        samples,
        Space::new().height(8),
        submit,
    ]
    .spacing(12)
    .padding(32)
    .max_width(720);

    container(scrollable(container(content).center_x(Length::Fill)).style(widgets::scrollable_style))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(widgets::screen_style)
        .into()
}

/// Banner describing engine readiness, or nothing when fully ready.
fn create_readiness_banner(state: &ScanState) -> Element<'_, Message> {
    match state.readiness {
        Readiness::Unknown => banner_text(
            "Checking analysis engine status...",
            widgets::info_banner_style,
        ),
        Readiness::Known(EngineStatus::Partial) => banner_text(
            "Some analysis models are unavailable. Results may be less accurate.",
            widgets::warning_banner_style,
        ),
        Readiness::Known(EngineStatus::NotReady) => {
            let retry = button(
                text(if state.is_probing { "Checking..." } else { "Retry" }).size(13),
            )
            .on_press_maybe(
                (!state.is_probing).then_some(Message::Scan(ScanMessage::ProbeRequested)),
            )
            .padding([6, 14])
            .style(widgets::secondary_button_style);

            container(
                row![
                    text("The analysis engine is starting up. Submissions are disabled until it is ready.")
                        .size(13),
                    Space::new().width(Length::Fill),
                    retry,
                ]
                .align_y(Alignment::Center)
                .spacing(12),
            )
            .padding(12)
            .width(Length::Fill)
            .style(widgets::error_banner_style)
            .into()
        }
        Readiness::Known(EngineStatus::Ready) => Space::new().height(0).into(),
    }
}

fn create_error_banner(state: &ScanState) -> Element<'_, Message> {
    state.error.as_ref().map_or_else(
        || Space::new().height(0).into(),
        |error| {
            container(text(error).size(13))
                .padding(12)
                .width(Length::Fill)
                .style(widgets::error_banner_style)
                .into()
        },
    )
}

/// Row of the three sample-email loaders.
fn create_sample_row(state: &ScanState) -> Element<'_, Message> {
    let p = palette::current();

    let sample_button = |sample: SampleEmail, accent| {
        button(text(sample.label()).size(13))
            .on_press_maybe(
                (!state.is_scanning).then_some(Message::Scan(ScanMessage::LoadSample(sample))),
            )
            .padding([12, 20])
            .width(Length::Fill)
            .style(widgets::sample_button_style(accent))
    };

    row![
        sample_button(SampleEmail::Phishing, p.accent_red),
        sample_button(SampleEmail::Spam, p.accent_yellow),
        sample_button(SampleEmail::Safe, p.accent_green),
    ]
    .spacing(12)
    .into()
}

/// Shared banner layout for plain-text notices.
fn banner_text<'a>(
    message: &'a str,
    style: impl Fn(&iced::Theme) -> iced::widget::container::Style + 'a,
) -> Element<'a, Message> {
    container(text(message).size(13))
        .padding(12)
        .width(Length::Fill)
        .style(style)
        .into()
}
