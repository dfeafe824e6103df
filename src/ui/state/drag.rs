// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Tracks a grab-and-drag on a card: the offset to draw it at while held,
//! and the recent pointer samples used to classify the release as a plain
//! drop or a shake.

use crate::config::GestureConfig;
use iced::{Point, Vector};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Horizontal movement below this (in pixels) does not count as a direction.
const JITTER: f32 = 2.0;

/// Samples older than this before release are ignored for velocity.
const VELOCITY_WINDOW: Duration = Duration::from_millis(100);

/// Thresholds that turn a drag into a shake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShakeThresholds {
    /// Horizontal direction changes required.
    pub reversals: u32,
    /// Window, ending at release, in which the reversals must happen.
    pub window: Duration,
    /// Release speed (pixels per second) that counts as a shake on its own.
    pub release_velocity: f32,
}

impl Default for ShakeThresholds {
    fn default() -> Self {
        Self::from(&GestureConfig::default())
    }
}

impl From<&GestureConfig> for ShakeThresholds {
    fn from(config: &GestureConfig) -> Self {
        Self {
            reversals: config.reversals(),
            window: config.window(),
            release_velocity: config.velocity(),
        }
    }
}

impl ShakeThresholds {
    /// How long a pointer sample stays relevant to classification.
    #[must_use]
    pub fn retention(&self) -> Duration {
        self.window.max(VELOCITY_WINDOW)
    }
}

/// How a drag ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// The card was dropped and snaps back.
    Drop,
    /// The card was shaken or tossed.
    Shake,
}

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Position where the drag started
    start_position: Option<Point>,

    /// Recent pointer positions, oldest first
    samples: VecDeque<(Instant, Point)>,

    /// Samples older than this are evicted on each move
    retention: Duration,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, position: Point, at: Instant, thresholds: &ShakeThresholds) {
        self.start_position = Some(position);
        self.retention = thresholds.retention();
        self.samples.clear();
        self.samples.push_back((at, position));
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_position.is_some()
    }

    /// Records a pointer move and returns the offset to draw the card at.
    pub fn move_to(&mut self, position: Point, at: Instant) -> Option<Vector> {
        let start = self.start_position?;

        while let Some((oldest, _)) = self.samples.front() {
            if at.saturating_duration_since(*oldest) <= self.retention {
                break;
            }
            self.samples.pop_front();
        }
        self.samples.push_back((at, position));

        Some(position - start)
    }

    /// Ends the drag and classifies it.
    ///
    /// Returns `None` when no drag was active.
    pub fn release(&mut self, at: Instant, thresholds: &ShakeThresholds) -> Option<Gesture> {
        self.start_position.take()?;
        let samples = std::mem::take(&mut self.samples);

        let shaken = count_reversals(&samples, at, thresholds.window) >= thresholds.reversals
            || release_speed(&samples, at) >= thresholds.release_velocity;

        Some(if shaken { Gesture::Shake } else { Gesture::Drop })
    }

    /// Abandons the drag without classifying it.
    pub fn cancel(&mut self) {
        self.start_position = None;
        self.samples.clear();
    }
}

/// Counts horizontal direction changes among samples inside `window`.
fn count_reversals(samples: &VecDeque<(Instant, Point)>, now: Instant, window: Duration) -> u32 {
    let mut reversals = 0;
    let mut direction = 0.0_f32;
    let mut anchor: Option<f32> = None;

    for (at, point) in samples {
        if now.saturating_duration_since(*at) > window {
            continue;
        }
        let Some(previous) = anchor else {
            anchor = Some(point.x);
            continue;
        };

        let dx = point.x - previous;
        if dx.abs() < JITTER {
            continue;
        }

        let sign = dx.signum();
        if direction != 0.0 && sign != direction {
            reversals += 1;
        }
        direction = sign;
        anchor = Some(point.x);
    }

    reversals
}

/// Pointer speed over the last [`VELOCITY_WINDOW`] before release, in px/s.
fn release_speed(samples: &VecDeque<(Instant, Point)>, now: Instant) -> f32 {
    let recent: Vec<&(Instant, Point)> = samples
        .iter()
        .filter(|(at, _)| now.saturating_duration_since(*at) <= VELOCITY_WINDOW)
        .collect();

    let (Some((first_at, first)), Some((last_at, last))) = (recent.first(), recent.last()) else {
        return 0.0;
    };

    let elapsed = last_at.saturating_duration_since(*first_at).as_secs_f32();
    if elapsed <= f32::EPSILON {
        return 0.0;
    }

    first.distance(*last) / elapsed
}
