//! Skin styling for the chapter overlay.
//!
//! The overlay carries its own skin (background, text, and active variants)
//! independent of the day/night application theme, mirroring how embeddable
//! player controls ship a default look that host pages can override.

use crate::config::{AppConfig, SkinColor, ThemeMode};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

pub fn app_theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Day => Theme::Light,
        ThemeMode::Night => Theme::Dark,
    }
}

pub fn skin_color(color: SkinColor) -> Color {
    Color {
        r: color.r.clamp(0.0, 1.0),
        g: color.g.clamp(0.0, 1.0),
        b: color.b.clamp(0.0, 1.0),
        a: color.a.clamp(0.0, 1.0),
    }
}

/// Style for the overlay container behind the chapter controls.
pub fn overlay_container(config: &AppConfig) -> impl Fn(&Theme) -> container::Style {
    let background = skin_color(config.skin_background);
    move |_theme| container::Style {
        background: Some(Background::Color(background)),
        ..container::Style::default()
    }
}

/// Style for one chapter button; the active chapter and hovered buttons use
/// the skin's active colors.
pub fn chapter_item(
    config: &AppConfig,
    active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let background = skin_color(config.skin_background);
    let text = skin_color(config.skin_text);
    let background_active = skin_color(config.skin_background_active);
    let text_active = skin_color(config.skin_text_active);

    move |_theme, status| {
        let highlighted = active || matches!(status, button::Status::Hovered);
        button::Style {
            background: Some(Background::Color(if highlighted {
                background_active
            } else {
                background
            })),
            text_color: if highlighted { text_active } else { text },
            border: Border {
                radius: 4.0.into(),
                ..Border::default()
            },
            shadow: Shadow::default(),
        }
    }
}

/// Style for the arrow buttons framing the horizontal strip.
pub fn arrow_button(config: &AppConfig) -> impl Fn(&Theme, button::Status) -> button::Style {
    let background = skin_color(config.skin_background);
    let background_active = skin_color(config.skin_background_active);
    let text = skin_color(config.skin_text);

    move |_theme, status| button::Style {
        background: Some(Background::Color(match status {
            button::Status::Hovered | button::Status::Pressed => background_active,
            _ => background,
        })),
        text_color: text,
        border: Border::default(),
        shadow: Shadow::default(),
    }
}

/// Style for a progress-bar tick marker.
pub fn marker(config: &AppConfig) -> impl Fn(&Theme, button::Status) -> button::Style {
    let text_active = skin_color(config.skin_text_active);

    move |_theme, status| button::Style {
        background: Some(Background::Color(match status {
            button::Status::Hovered | button::Status::Pressed => text_active,
            _ => Color {
                a: 0.7 * text_active.a,
                ..text_active
            },
        })),
        text_color: text_active,
        border: Border::default(),
        shadow: Shadow::default(),
    }
}
