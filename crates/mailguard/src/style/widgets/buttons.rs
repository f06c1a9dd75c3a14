//! Button style functions.

use iced::widget::button;
use iced::{Background, Border, Color};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Primary button style - neon with glow effect.
pub fn primary_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(p.primary)),
        text_color: p.text_on_primary,
        border: Border {
            color: p.primary_light,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::glow(p.primary),
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.primary_light)),
            shadow: shadows::glow_strong(p.primary),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.primary_dark)),
            shadow: shadows::subtle(),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(p.surface_elevated)),
            text_color: p.text_muted,
            border: Border {
                color: p.border_subtle,
                width: 1.0,
                radius: radius::MEDIUM.into(),
            },
            shadow: shadows::none(),
            ..base
        },
    }
}

/// Secondary button style - bordered, transparent background.
pub fn secondary_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: p.text_primary,
        border: Border {
            color: p.border_medium,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::none(),
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.hover)),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.selected)),
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: p.text_muted,
            border: Border {
                color: p.border_subtle,
                width: 1.0,
                radius: radius::MEDIUM.into(),
            },
            ..base
        },
    }
}

/// Sample-email button style - tinted with the sample's accent color.
pub fn sample_button_style(
    accent: Color,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let base = button::Style {
            background: Some(Background::Color(Color {
                a: 0.10,
                ..accent
            })),
            text_color: accent,
            border: Border {
                color: Color { a: 0.30, ..accent },
                width: 1.0,
                radius: radius::LARGE.into(),
            },
            shadow: shadows::none(),
            snap: false,
        };

        match status {
            button::Status::Active | button::Status::Disabled => base,
            button::Status::Hovered => button::Style {
                background: Some(Background::Color(Color { a: 0.20, ..accent })),
                border: Border {
                    color: Color { a: 0.50, ..accent },
                    width: 1.0,
                    radius: radius::LARGE.into(),
                },
                ..base
            },
            button::Status::Pressed => button::Style {
                background: Some(Background::Color(Color { a: 0.30, ..accent })),
                ..base
            },
        }
    }
}

/// Danger button style - for logout.
pub fn danger_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: p.accent_red,
        border: Border {
            color: Color {
                a: 0.40,
                ..p.accent_red
            },
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::none(),
        snap: false,
    };

    match status {
        button::Status::Active | button::Status::Disabled => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color {
                a: 0.12,
                ..p.accent_red
            })),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color {
                a: 0.20,
                ..p.accent_red
            })),
            ..base
        },
    }
}
