// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`, so every call returns a clone of the same handle.
//! The sources are single-color stroke drawings; [`tinted`] recolors them.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let download = button(icons::sized(icons::download(), sizing::ICON_MD));
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `refresh` not `regenerate_card`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

// =============================================================================
// Macro for icon definition with cached handle
// =============================================================================

/// Defines an icon function whose handle is created once on first access.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Card Icons
// =============================================================================

define_icon!(
    refresh,
    "refresh.svg",
    "Refresh icon: two arrows chasing each other."
);
define_icon!(
    download,
    "download.svg",
    "Download icon: arrow pointing into a tray."
);
define_icon!(
    share,
    "share.svg",
    "Share icon: three connected nodes."
);
define_icon!(
    alert_triangle,
    "alert_triangle.svg",
    "Alert icon: exclamation mark in a triangle."
);
define_icon!(
    photo,
    "photo.svg",
    "Photo icon: framed landscape with mountains and sun."
);

// =============================================================================
// Notification Icons
// =============================================================================

define_icon!(checkmark, "checkmark.svg", "Checkmark icon: tick.");
define_icon!(info, "info.svg", "Info icon: letter i in a circle.");
define_icon!(cross, "cross.svg", "Cross icon: diagonal X.");

/// Warning icon: same glyph as the card error face.
pub fn warning<'a>() -> Svg<'a> {
    alert_triangle()
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Creates an icon with specified dimensions.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Recolors an icon.
pub fn tinted<'a>(icon: Svg<'a>, color: Color) -> Svg<'a> {
    icon.style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}
