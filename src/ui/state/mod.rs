// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Interaction state kept apart from the widgets that render it, so the
//! logic can be tested without a renderer.

pub mod drag;

pub use drag::{DragState, Gesture, ShakeThresholds};
