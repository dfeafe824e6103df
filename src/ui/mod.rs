// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: they
//! receive immutable snapshots and report user actions as messages.
//!
//! # Components
//!
//! - [`polaroid_card`] - Renders one card and forwards its intents
//! - [`progress_bar`] - Batch progress label and track
//! - [`footer`] - Credit line and "Share Website" action
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Pointer gesture tracking (drag, shake)
//! - [`widgets`] - Custom Iced widgets (spinner, draggable card)
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - SVG icon loading and rendering
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod footer;
pub mod icons;
pub mod notifications;
pub mod polaroid_card;
pub mod progress_bar;
pub mod state;
pub mod styles;
pub mod widgets;
