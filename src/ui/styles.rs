// SPDX-License-Identifier: MPL-2.0
//! Shared colors and widget styling.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Accent blue, carried over from the original tool's drop-area border.
pub const ACCENT: Color = Color::from_rgb(0.204, 0.596, 0.859);

pub const MUTED: Color = Color::from_rgb(0.4, 0.4, 0.4);

pub const ERROR_TEXT: Color = Color::from_rgb(0.804, 0.2, 0.2);

const ERROR_BACKGROUND: Color = Color {
    r: 0.804,
    g: 0.2,
    b: 0.2,
    a: 0.12,
};

/// Container style for the single error-display region.
pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ERROR_BACKGROUND)),
        text_color: Some(ERROR_TEXT),
        border: Border {
            color: ERROR_TEXT,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..container::Style::default()
    }
}

/// Primary action button (open file, save image).
pub fn primary_button(theme: &Theme, status: button::Status) -> button::Style {
    let mut style = button::primary(theme, status);
    style.border.radius = 6.0.into();
    style
}
