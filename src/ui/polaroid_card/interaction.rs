// SPDX-License-Identifier: MPL-2.0
//! Platform interaction strategies.
//!
//! Compact (touch) layouts get a fade and slide-in entrance and no dragging. Wide
//! layouts wrap the card in [`DraggableCard`] so shaking it regenerates.

use crate::ui::design_tokens::motion;
use crate::ui::state::ShakeThresholds;
use crate::ui::styles;
use crate::ui::widgets::DraggableCard;
use iced::widget::{Container, Space, Stack};
use iced::{Element, Length, Padding};
use std::time::{Duration, Instant};

/// Length of the fade and slide-in.
pub const ENTRANCE_DURATION: Duration = Duration::from_millis(motion::ENTRANCE_MS);

/// Entrance progress for a card that appeared at some instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceAnimation {
    progress: f32,
}

impl EntranceAnimation {
    /// Entrance state at `now` for a card shown at `appeared`.
    #[must_use]
    pub fn at(appeared: Instant, now: Instant) -> Self {
        let t = now.saturating_duration_since(appeared).as_secs_f32()
            / ENTRANCE_DURATION.as_secs_f32();
        Self {
            progress: t.clamp(0.0, 1.0),
        }
    }

    /// A finished entrance.
    #[must_use]
    pub fn settled() -> Self {
        Self { progress: 1.0 }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }

    /// Vertical offset, easing out from [`motion::ENTRANCE_OFFSET`] to zero.
    #[must_use]
    pub fn offset(&self) -> f32 {
        let remaining = 1.0 - self.progress;
        motion::ENTRANCE_OFFSET * remaining * remaining
    }

    /// Card opacity, rising linearly from 0 to 1.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.progress
    }
}

/// How the card responds to the pointer, chosen once per render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionMode {
    /// Static card that fades and slides in.
    Entrance(EntranceAnimation),
    /// Card that can be picked up and shaken.
    Draggable(ShakeThresholds),
}

impl InteractionMode {
    /// Picks the strategy for the current layout.
    #[must_use]
    pub fn select(is_mobile: bool, entrance: EntranceAnimation, thresholds: ShakeThresholds) -> Self {
        if is_mobile {
            InteractionMode::Entrance(entrance)
        } else {
            InteractionMode::Draggable(thresholds)
        }
    }

    #[must_use]
    pub fn is_draggable(&self) -> bool {
        matches!(self, InteractionMode::Draggable(_))
    }

    /// Wraps the rendered card. `on_shake` is only used when draggable.
    pub fn wrap<'a, Message>(
        self,
        card: impl Into<Element<'a, Message>>,
        on_shake: Option<Message>,
    ) -> Element<'a, Message>
    where
        Message: Clone + 'a,
    {
        match self {
            InteractionMode::Entrance(entrance) => {
                let offset = entrance.offset();
                let card: Element<'a, Message> = if entrance.is_finished() {
                    card.into()
                } else {
                    let veil = Container::new(Space::new())
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .style(styles::container::fade_veil(1.0 - entrance.opacity()));
                    Stack::new().push(card).push(veil).into()
                };
                // Total padding stays constant so neighbours don't move.
                Container::new(card)
                    .padding(Padding {
                        top: offset,
                        bottom: motion::ENTRANCE_OFFSET - offset,
                        ..Padding::ZERO
                    })
                    .into()
            }
            InteractionMode::Draggable(thresholds) => DraggableCard::new(card)
                .on_shake_maybe(on_shake)
                .thresholds(thresholds)
                .into(),
        }
    }
}

impl Default for InteractionMode {
    fn default() -> Self {
        InteractionMode::Draggable(ShakeThresholds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_selects_entrance() {
        let mode = InteractionMode::select(true, EntranceAnimation::settled(), ShakeThresholds::default());
        assert!(!mode.is_draggable());
        let mode = InteractionMode::select(false, EntranceAnimation::settled(), ShakeThresholds::default());
        assert!(mode.is_draggable());
    }

    #[test]
    fn entrance_slides_up_and_settles() {
        let t0 = Instant::now();
        let start = EntranceAnimation::at(t0, t0);
        assert_eq!(start.offset(), motion::ENTRANCE_OFFSET);
        assert!(!start.is_finished());

        let half = EntranceAnimation::at(t0, t0 + ENTRANCE_DURATION / 2);
        assert!(half.offset() > 0.0 && half.offset() < motion::ENTRANCE_OFFSET / 2.0);

        let end = EntranceAnimation::at(t0, t0 + ENTRANCE_DURATION * 2);
        assert!(end.is_finished());
        assert_eq!(end.offset(), 0.0);
    }

    #[test]
    fn entrance_fades_in() {
        let t0 = Instant::now();
        assert_eq!(EntranceAnimation::at(t0, t0).opacity(), 0.0);

        let half = EntranceAnimation::at(t0, t0 + ENTRANCE_DURATION / 2).opacity();
        assert!((half - 0.5).abs() < 0.01);

        assert_eq!(EntranceAnimation::settled().opacity(), 1.0);
    }

    #[test]
    fn entrance_wrap_builds_mid_animation() {
        let t0 = Instant::now();
        for entrance in [
            EntranceAnimation::at(t0, t0 + ENTRANCE_DURATION / 3),
            EntranceAnimation::settled(),
        ] {
            let _element: Element<'_, ()> =
                InteractionMode::Entrance(entrance).wrap(Space::new(), None);
        }
    }
}
