// SPDX-License-Identifier: MPL-2.0
//! Visual transition between two card statuses.

use super::CardStatus;

/// How the card face changes when the status changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Status unchanged.
    None,
    /// Entering or leaving `Pending`: the card flips over.
    Flip,
    /// Between `Done` and `Error`: direct face swap.
    Swap,
}

impl Transition {
    #[must_use]
    pub fn between(from: CardStatus, to: CardStatus) -> Self {
        if from == to {
            Transition::None
        } else if from.is_pending() || to.is_pending() {
            Transition::Flip
        } else {
            Transition::Swap
        }
    }
}
