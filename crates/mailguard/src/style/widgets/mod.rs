//! Widget styles for the dark security-console look.

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

// Re-export radius constants
pub use shadows::radius;

// Re-export container styles
pub use containers::{
    card_style, error_banner_style, info_banner_style, screen_style, verdict_row_style,
    warning_banner_style,
};

// Re-export button styles
pub use buttons::{
    danger_button_style, primary_button_style, sample_button_style, secondary_button_style,
};

// Re-export input styles
pub use inputs::{input_style, scrollable_style};
