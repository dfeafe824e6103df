// SPDX-License-Identifier: MPL-2.0
pub mod animated_spinner;
pub mod draggable_card;

pub use animated_spinner::AnimatedSpinner;
pub use draggable_card::DraggableCard;
