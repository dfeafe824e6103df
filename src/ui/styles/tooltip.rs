// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles for the card action buttons.

use crate::ui::design_tokens::{palette, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Dark label on the light card frame.
pub fn tooltip_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.95,
            ..palette::GRAY_900
        })),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: palette::NEUTRAL_600,
        },
        shadow: shadow::SM,
        text_color: Some(palette::NEUTRAL_100),
        ..Default::default()
    }
}

/// Creates a styled tooltip.
///
/// ```ignore
/// use crate::ui::styles::tooltip;
///
/// tooltip::styled(download_button, "Download", tooltip::Position::Top)
/// ```
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XXS)
}

pub use tooltip::Position;
