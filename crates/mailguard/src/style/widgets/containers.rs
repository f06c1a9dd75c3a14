//! Container style functions.

use iced::widget::container;
use iced::{Background, Border, Color};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Full-screen background style.
pub fn screen_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.background)),
        ..Default::default()
    }
}

/// Card style - elevated surface with subtle border.
pub fn card_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_elevated)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::LARGE.into(),
        },
        shadow: shadows::subtle(),
        ..Default::default()
    }
}

/// Row holding a single model verdict on the dashboard.
pub fn verdict_row_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        ..Default::default()
    }
}

/// Informational banner - blue tint.
pub fn info_banner_style(_theme: &iced::Theme) -> container::Style {
    banner(palette::current().accent_blue)
}

/// Warning banner - yellow tint, used for reduced analysis.
pub fn warning_banner_style(_theme: &iced::Theme) -> container::Style {
    banner(palette::current().accent_yellow)
}

/// Error banner - red tint.
pub fn error_banner_style(_theme: &iced::Theme) -> container::Style {
    banner(palette::current().accent_red)
}

fn banner(accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color { a: 0.10, ..accent })),
        border: Border {
            color: Color { a: 0.35, ..accent },
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        text_color: Some(accent),
        ..Default::default()
    }
}
