// SPDX-License-Identifier: MPL-2.0
//! Batch progress shown above the cards while generation runs.

use crate::domain::progress::GenerationProgress;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Space, Text};
use iced::{alignment, Element, Length};

/// Width of the filled part of a track of `track_width`.
#[must_use]
pub fn fill_width(progress: GenerationProgress, track_width: f32) -> f32 {
    (track_width * progress.fraction()).clamp(0.0, track_width)
}

/// Renders the label and the track.
pub fn view<'a, Message: 'a>(progress: GenerationProgress, i18n: &I18n) -> Element<'a, Message> {
    let label = i18n.tr_with_args(
        "progress-label",
        &[("percent", progress.rounded().to_string().as_str())],
    );

    let fill = fill_width(progress, sizing::PROGRESS_MAX_WIDTH);
    let bar: Element<'a, Message> = if fill > 0.0 {
        Container::new(Space::new())
            .width(Length::Fixed(fill))
            .height(Length::Fill)
            .style(styles::container::progress_fill)
            .into()
    } else {
        Space::new().into()
    };

    let track = Container::new(bar)
        .width(Length::Fixed(sizing::PROGRESS_MAX_WIDTH))
        .height(Length::Fixed(sizing::PROGRESS_TRACK_HEIGHT))
        .padding(2.0)
        .style(styles::container::progress_track);

    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(label)
                .size(typography::BODY)
                .color(palette::NEUTRAL_200),
        )
        .push(track)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_tracks_fraction() {
        assert_eq!(fill_width(GenerationProgress::new(0.0), 400.0), 0.0);
        assert_eq!(fill_width(GenerationProgress::new(50.0), 400.0), 200.0);
        assert_eq!(fill_width(GenerationProgress::new(100.0), 400.0), 400.0);
    }

    #[test]
    fn partial_batch_fill() {
        let progress = GenerationProgress::from_counts(3, 6);
        assert_eq!(progress.rounded(), 50);
        assert_eq!(fill_width(progress, sizing::PROGRESS_MAX_WIDTH), sizing::PROGRESS_MAX_WIDTH / 2.0);
    }
}
