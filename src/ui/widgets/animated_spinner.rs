// SPDX-License-Identifier: MPL-2.0
//! Animated spinner widget using Canvas for smooth rotation.
//!
//! Drawn as a faint ring with a bright quarter arc, the way a developing
//! photo's loading indicator looks on the card's back face.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{FRAC_PI_2, TAU};
use std::time::Duration;

/// One full turn per second.
const PERIOD: Duration = Duration::from_secs(1);

const STROKE_WIDTH: f32 = 2.0;
const SEGMENTS: u16 = 24;

/// Animated spinner that rotates smoothly.
#[derive(Debug, Clone, Copy)]
pub struct AnimatedSpinner {
    rotation: f32, // radians
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            rotation,
            color,
            size: sizing::SPINNER,
        }
    }

    /// Rotation for a spinner that has been running for `elapsed`.
    #[must_use]
    pub fn rotation_at(elapsed: Duration) -> f32 {
        let turns = elapsed.as_secs_f32() / PERIOD.as_secs_f32();
        turns.fract() * TAU
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<'a, Message: 'a>(self) -> iced::Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        draw_spinner(&mut frame, self.rotation, self.color);
        vec![frame.into_geometry()]
    }
}

fn draw_spinner(frame: &mut Frame, rotation: f32, color: Color) {
    let center = frame.center();
    let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

    frame.stroke(
        &Path::circle(center, radius),
        Stroke::default()
            .with_width(STROKE_WIDTH)
            .with_color(Color { a: 0.2, ..color }),
    );

    // Quarter arc starting at the bottom, like a bottom-only border.
    let start_angle = rotation + FRAC_PI_2 - FRAC_PI_2 / 2.0;
    let sweep = FRAC_PI_2;

    let mut arc = canvas::path::Builder::new();
    arc.move_to(Point::new(
        center.x + radius * start_angle.cos(),
        center.y + radius * start_angle.sin(),
    ));
    for i in 1..=SEGMENTS {
        let angle = start_angle + sweep * f32::from(i) / f32::from(SEGMENTS);
        arc.line_to(Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ));
    }

    frame.stroke(
        &arc.build(),
        Stroke::default()
            .with_width(STROKE_WIDTH)
            .with_color(color)
            .with_line_cap(canvas::LineCap::Round),
    );
}
