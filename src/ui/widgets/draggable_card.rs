// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that lets the user pick a card up and shake it.
//!
//! The card follows the pointer while held and eases back to its slot on
//! release. A release classified as [`Gesture::Shake`] publishes the
//! configured message. Presses that land on an interactive child (the
//! card's buttons) are left to the child.

use crate::ui::state::drag::{DragState, Gesture, ShakeThresholds};
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{touch, window, Element, Event, Length, Point, Rectangle, Size, Vector};
use std::time::{Duration, Instant};

/// Time the card takes to return to its slot after release.
const SNAP_BACK: Duration = Duration::from_millis(200);

/// A widget that wraps a card and makes it draggable.
pub struct DraggableCard<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_shake: Option<Message>,
    thresholds: ShakeThresholds,
}

impl<'a, Message, Theme, Renderer> DraggableCard<'a, Message, Theme, Renderer> {
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            on_shake: None,
            thresholds: ShakeThresholds::default(),
        }
    }

    /// Message published when the card is shaken.
    #[must_use]
    pub fn on_shake_maybe(mut self, message: Option<Message>) -> Self {
        self.on_shake = message;
        self
    }

    #[must_use]
    pub fn thresholds(mut self, thresholds: ShakeThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }
}

/// Widget-tree state; lives as long as the card stays in the tree.
#[derive(Debug, Default)]
struct State {
    drag: DragState,
    snap: Option<SnapBack>,
    offset: Vector,
}

#[derive(Debug, Clone, Copy)]
struct SnapBack {
    from: Vector,
    started: Instant,
}

impl State {
    fn is_active(&self) -> bool {
        self.drag.is_dragging() || self.snap.is_some()
    }

    fn press(&mut self, position: Point, now: Instant, thresholds: &ShakeThresholds) {
        self.snap = None;
        self.drag.start(position, now, thresholds);
        self.offset = Vector::ZERO;
    }

    fn drag_to(&mut self, position: Point, now: Instant) -> bool {
        match self.drag.move_to(position, now) {
            Some(offset) => {
                self.offset = offset;
                true
            }
            None => false,
        }
    }

    fn release(&mut self, now: Instant, thresholds: &ShakeThresholds) -> Option<Gesture> {
        let gesture = self.drag.release(now, thresholds)?;
        self.snap = Some(SnapBack {
            from: self.offset,
            started: now,
        });
        Some(gesture)
    }

    /// Advances the snap-back. Returns `true` while more frames are needed.
    fn animate(&mut self, now: Instant) -> bool {
        let Some(snap) = self.snap else {
            return false;
        };
        let elapsed = now.saturating_duration_since(snap.started);
        self.offset = snap_offset(snap.from, elapsed);
        if elapsed >= SNAP_BACK {
            self.snap = None;
            self.offset = Vector::ZERO;
            return false;
        }
        true
    }
}

/// Offset during the snap-back, easing out to zero.
fn snap_offset(from: Vector, elapsed: Duration) -> Vector {
    let t = (elapsed.as_secs_f32() / SNAP_BACK.as_secs_f32()).clamp(0.0, 1.0);
    let remaining = (1.0 - t).powi(3);
    from * remaining
}

enum Pointer {
    Pressed(Point),
    Moved(Point),
    Released,
    Lost,
}

fn pointer_event(event: &Event, cursor: mouse::Cursor) -> Option<Pointer> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            cursor.position().map(Pointer::Pressed)
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) => Some(Pointer::Moved(*position)),
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => Some(Pointer::Released),
        Event::Mouse(mouse::Event::CursorLeft) => Some(Pointer::Lost),
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Pointer::Pressed(*position))
        }
        Event::Touch(touch::Event::FingerMoved { position, .. }) => Some(Pointer::Moved(*position)),
        Event::Touch(touch::Event::FingerLifted { .. }) => Some(Pointer::Released),
        Event::Touch(touch::Event::FingerLost { .. }) => Some(Pointer::Lost),
        _ => None,
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for DraggableCard<'_, Message, Theme, Renderer>
where
    Message: Clone,
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let content = &tree.children[0];

        if !state.is_active() {
            self.content
                .as_widget()
                .draw(content, renderer, theme, style, layout, cursor, viewport);
            return;
        }

        // Own layer so the lifted card draws above its neighbours.
        renderer.with_layer(*viewport, |renderer| {
            renderer.with_translation(state.offset, |renderer| {
                self.content.as_widget().draw(
                    content,
                    renderer,
                    theme,
                    style,
                    layout,
                    mouse::Cursor::Unavailable,
                    viewport,
                );
            });
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();

        if let Event::Window(window::Event::RedrawRequested(now)) = event {
            if state.animate(*now) {
                shell.request_redraw();
            }
        }

        if !state.drag.is_dragging() {
            self.content.as_widget_mut().update(
                &mut tree.children[0],
                event,
                layout,
                cursor,
                renderer,
                clipboard,
                shell,
                viewport,
            );
            if shell.is_event_captured() {
                return;
            }
        }

        let now = Instant::now();
        match pointer_event(event, cursor) {
            Some(Pointer::Pressed(position)) if layout.bounds().contains(position) => {
                state.press(position, now, &self.thresholds);
                shell.capture_event();
                shell.request_redraw();
            }
            Some(Pointer::Moved(position)) => {
                if state.drag_to(position, now) {
                    shell.capture_event();
                    shell.request_redraw();
                }
            }
            Some(Pointer::Released) => {
                if let Some(gesture) = state.release(now, &self.thresholds) {
                    if gesture == Gesture::Shake {
                        if let Some(message) = &self.on_shake {
                            shell.publish(message.clone());
                        }
                    }
                    shell.capture_event();
                    shell.request_redraw();
                }
            }
            Some(Pointer::Lost) => {
                if state.drag.is_dragging() {
                    state.drag.cancel();
                    state.snap = Some(SnapBack {
                        from: state.offset,
                        started: now,
                    });
                    shell.request_redraw();
                }
            }
            Some(Pointer::Pressed(_)) | None => {}
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();
        if state.drag.is_dragging() {
            return mouse::Interaction::Grabbing;
        }

        let interaction = self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        );

        if interaction == mouse::Interaction::None && cursor.is_over(layout.bounds()) {
            mouse::Interaction::Grab
        } else {
            interaction
        }
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let offset = tree.state.downcast_ref::<State>().offset;
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation + offset,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<DraggableCard<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(card: DraggableCard<'a, Message, Theme, Renderer>) -> Self {
        Self::new(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds() -> ShakeThresholds {
        ShakeThresholds {
            reversals: 3,
            window: Duration::from_millis(800),
            release_velocity: 2_500.0,
        }
    }

    #[test]
    fn snap_offset_eases_to_zero() {
        let from = Vector::new(100.0, -40.0);
        assert_eq!(snap_offset(from, Duration::ZERO), from);
        let mid = snap_offset(from, SNAP_BACK / 2);
        assert!(mid.x > 0.0 && mid.x < 50.0);
        assert_eq!(snap_offset(from, SNAP_BACK), Vector::ZERO);
    }

    #[test]
    fn release_starts_snap_back_then_settles() {
        let mut state = State::default();
        let t0 = Instant::now();
        state.press(Point::ORIGIN, t0, &thresholds());
        assert!(state.drag_to(Point::new(40.0, 0.0), t0 + Duration::from_millis(300)));
        assert_eq!(state.offset, Vector::new(40.0, 0.0));

        let gesture = state.release(t0 + Duration::from_millis(600), &thresholds());
        assert_eq!(gesture, Some(Gesture::Drop));
        assert!(state.is_active());

        assert!(state.animate(t0 + Duration::from_millis(650)));
        assert!(!state.animate(t0 + Duration::from_millis(900)));
        assert_eq!(state.offset, Vector::ZERO);
        assert!(!state.is_active());
    }

    #[test]
    fn moves_without_press_do_nothing() {
        let mut state = State::default();
        assert!(!state.drag_to(Point::new(10.0, 10.0), Instant::now()));
        assert!(state.release(Instant::now(), &thresholds()).is_none());
    }

    #[test]
    fn pointer_events_are_classified() {
        let cursor = mouse::Cursor::Available(Point::new(5.0, 5.0));
        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert!(matches!(
            pointer_event(&press, cursor),
            Some(Pointer::Pressed(p)) if p == Point::new(5.0, 5.0)
        ));

        let right = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right));
        assert!(pointer_event(&right, cursor).is_none());

        let release = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        assert!(matches!(pointer_event(&release, cursor), Some(Pointer::Released)));
    }
}
