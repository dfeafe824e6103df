// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all UI components.

pub mod button;
pub mod container;
pub mod tooltip;

pub use button::{outline as button_outline, tape as button_tape};
