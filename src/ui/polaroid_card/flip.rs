// SPDX-License-Identifier: MPL-2.0
//! Flip animation played when a card enters or leaves `Pending`.
//!
//! The front carries the result (image, placeholder or error) and the back
//! carries the "developing" spinner. A pending card rests back-up.

use crate::domain::card::{CardStatus, Transition};
use crate::ui::design_tokens::motion;
use crate::ui::widgets::AnimatedSpinner;
use std::time::{Duration, Instant};

/// Length of one flip.
pub const FLIP_DURATION: Duration = Duration::from_millis(motion::FLIP_MS);

/// Degrees at which the back replaces the front.
const EDGE_ON: f32 = 90.0;

/// One rendered moment of the flip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipFrame {
    /// Rotation around the vertical axis, `0` front-up to `180` back-up.
    pub angle: f32,
    /// Whether the back face is the one facing the viewer.
    pub showing_back: bool,
    /// Spinner rotation for the back face, in radians.
    pub spinner_rotation: f32,
}

impl FlipFrame {
    /// Resting frame for `status` with no animation running.
    #[must_use]
    pub fn resting(status: CardStatus) -> Self {
        Self::at_angle(resting_angle(status), 0.0)
    }

    fn at_angle(angle: f32, spinner_rotation: f32) -> Self {
        Self {
            angle,
            showing_back: angle >= EDGE_ON,
            spinner_rotation,
        }
    }

    /// Horizontal scale of the visible face, `1` facing the viewer and `0` edge-on.
    #[must_use]
    pub fn width_factor(&self) -> f32 {
        self.angle.to_radians().cos().abs()
    }
}

impl Default for FlipFrame {
    fn default() -> Self {
        Self::resting(CardStatus::Pending)
    }
}

fn resting_angle(status: CardStatus) -> f32 {
    if status.is_pending() {
        180.0
    } else {
        0.0
    }
}

/// Per-card, tick-driven flip state. Ephemeral: nothing here is persisted.
#[derive(Debug, Clone)]
pub struct FlipAnimation {
    status: CardStatus,
    from_angle: f32,
    to_angle: f32,
    started: Option<Instant>,
    born: Instant,
}

impl FlipAnimation {
    /// Starts at rest for `status`.
    #[must_use]
    pub fn new(status: CardStatus, now: Instant) -> Self {
        let angle = resting_angle(status);
        Self {
            status,
            from_angle: angle,
            to_angle: angle,
            started: None,
            born: now,
        }
    }

    /// Records the latest status. A flip starts only when the change enters
    /// or leaves `Pending`; other changes swap faces in place.
    ///
    /// Returns the transition that was observed.
    pub fn observe(&mut self, status: CardStatus, now: Instant) -> Transition {
        let transition = Transition::between(self.status, status);
        self.status = status;

        if transition == Transition::Flip {
            // Reverse from wherever the card currently is.
            self.from_angle = self.angle(now);
            self.to_angle = resting_angle(status);
            self.started = Some(now);
        }

        transition
    }

    /// Whether a flip is still in progress at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.started
            .is_some_and(|started| now.saturating_duration_since(started) < FLIP_DURATION)
    }

    /// Whether the back face (spinner) is visible and needs ticks.
    #[must_use]
    pub fn needs_ticks(&self, now: Instant) -> bool {
        self.is_animating(now) || self.status.is_pending()
    }

    #[must_use]
    pub fn frame(&self, now: Instant) -> FlipFrame {
        let spinner = AnimatedSpinner::rotation_at(now.saturating_duration_since(self.born));
        FlipFrame::at_angle(self.angle(now), spinner)
    }

    fn angle(&self, now: Instant) -> f32 {
        let Some(started) = self.started else {
            return self.to_angle;
        };
        let t = now.saturating_duration_since(started).as_secs_f32() / FLIP_DURATION.as_secs_f32();
        if t >= 1.0 {
            return self.to_angle;
        }
        self.from_angle + (self.to_angle - self.from_angle) * ease_in_out(t)
    }
}

fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
