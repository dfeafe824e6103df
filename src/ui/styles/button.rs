// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Yellow "tape" button: primary actions and the card retry.
pub fn tape(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::ACCENT_300,
        button::Status::Disabled => palette::NEUTRAL_300,
        button::Status::Active | button::Status::Pressed => palette::ACCENT_400,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: BLACK,
        border: Border {
            radius: radius::XS.into(),
            ..Default::default()
        },
        shadow: if matches!(status, button::Status::Disabled) {
            shadow::NONE
        } else {
            shadow::TAPE
        },
        snap: true,
    }
}

/// Translucent outlined button for secondary actions on the dark backdrop.
pub fn outline(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Hovered => (WHITE, BLACK),
        button::Status::Pressed => (palette::NEUTRAL_200, BLACK),
        button::Status::Disabled => (
            Color {
                a: opacity::OVERLAY_FAINT,
                ..WHITE
            },
            palette::NEUTRAL_500,
        ),
        button::Status::Active => (
            Color {
                a: opacity::OVERLAY_FAINT,
                ..WHITE
            },
            WHITE,
        ),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..WHITE
            },
            width: 1.0,
            radius: radius::XS.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Bare text link: muted until hovered.
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ACCENT_400,
        button::Status::Active | button::Status::Disabled => palette::NEUTRAL_400,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round icon button in the card's caption row.
pub fn card_action(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (Some(Background::Color(palette::NEUTRAL_200)), BLACK)
        }
        button::Status::Active | button::Status::Disabled => (None, palette::NEUTRAL_600),
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
