//! Color palette for the dark security-console theme.
//!
//! Single dark theme with neon accents, matching the product's
//! cyber-styled branding.

use iced::Color;

use mailguard_core::Decision;

/// Complete color palette for the application.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // Primary brand colors
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,

    // Surface colors
    pub surface: Color,
    pub surface_elevated: Color,
    pub background: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_primary: Color,

    // Accent colors
    pub accent_blue: Color,
    pub accent_green: Color,
    pub accent_yellow: Color,
    pub accent_red: Color,

    // State colors
    pub selected: Color,
    pub hover: Color,

    // Border colors
    pub border_subtle: Color,
    pub border_medium: Color,
}

impl Palette {
    /// The dark console palette.
    ///
    /// Neon green primary on near-black slate surfaces, terminal-style
    /// accent colors for verdicts and banners.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            // Primary - neon green, the product's signature color
            primary: Color::from_rgb(0.0, 1.0, 0.53),
            primary_light: Color::from_rgb(0.25, 1.0, 0.65),
            primary_dark: Color::from_rgb(0.0, 0.78, 0.42),

            // Surfaces - deep slate
            surface: Color::from_rgb(0.06, 0.08, 0.12),
            surface_elevated: Color::from_rgb(0.09, 0.11, 0.16),
            background: Color::from_rgb(0.01, 0.02, 0.06),

            // Text - high contrast
            text_primary: Color::from_rgb(0.93, 0.95, 0.97),
            text_secondary: Color::from_rgb(0.62, 0.66, 0.73),
            text_muted: Color::from_rgb(0.42, 0.46, 0.54),
            text_on_primary: Color::from_rgb(0.01, 0.02, 0.06),

            // Accents - terminal-inspired
            accent_blue: Color::from_rgb(0.05, 0.65, 0.91),
            accent_green: Color::from_rgb(0.13, 0.87, 0.42),
            accent_yellow: Color::from_rgb(0.98, 0.80, 0.08),
            accent_red: Color::from_rgb(0.97, 0.27, 0.27),

            // States
            selected: Color::from_rgb(0.06, 0.20, 0.15),
            hover: Color::from_rgb(0.11, 0.13, 0.19),

            // Borders
            border_subtle: Color::from_rgb(0.16, 0.19, 0.26),
            border_medium: Color::from_rgb(0.24, 0.28, 0.36),
        }
    }
}

/// The active palette.
#[must_use]
pub const fn current() -> Palette {
    Palette::dark()
}

/// The accent color for a scan verdict.
#[must_use]
pub const fn decision_color(decision: Decision) -> Color {
    let p = current();
    match decision {
        Decision::Phishing => p.accent_red,
        Decision::Spam => p.accent_yellow,
        Decision::Safe => p.accent_green,
        Decision::Error | Decision::Unknown => p.text_muted,
    }
}
