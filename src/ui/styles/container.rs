// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dark backdrop behind the whole window.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::NEUTRAL_200),
        ..Default::default()
    }
}

/// Backdrop-coloured veil over a card that is fading in. `alpha` is the
/// veil's opacity, so `0.0` leaves the card fully visible.
pub fn fade_veil(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha.clamp(0.0, 1.0),
            ..palette::GRAY_900
        })),
        ..Default::default()
    }
}

/// The white paper frame around a card.
pub fn polaroid_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NEUTRAL_100)),
        text_color: Some(palette::BLACK),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::XL,
        ..Default::default()
    }
}

/// Grey well behind the photo, the placeholder and the spinner.
pub fn photo_well(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NEUTRAL_200)),
        text_color: Some(palette::NEUTRAL_500),
        ..Default::default()
    }
}

/// Error face text color.
pub fn error_face(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NEUTRAL_200)),
        text_color: Some(palette::ERROR_600),
        ..Default::default()
    }
}

/// Empty progress track.
pub fn progress_track(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.3,
            ..palette::BLACK
        })),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
            width: 2.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Filled portion of the progress track.
pub fn progress_fill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ACCENT_400)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Translucent bar pinned to the bottom of the window.
pub fn footer_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        text_color: Some(palette::NEUTRAL_300),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_FAINT,
                ..palette::WHITE
            },
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}
