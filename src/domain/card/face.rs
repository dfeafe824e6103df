// SPDX-License-Identifier: MPL-2.0
//! Face selection: which of the mutually exclusive card faces is shown.

use super::{Caption, CardState, CardStatus};

/// The visual state of a card at a given moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face<'a> {
    /// Generation failed. `message` is `None` when the default text applies.
    Error { message: Option<&'a str> },
    /// Generation succeeded with an image.
    Image { url: &'a str },
    /// Generation succeeded without an image; shows the caption.
    Placeholder { caption: &'a Caption },
    /// Generation in flight.
    Loading,
}

/// Picks the face for a card snapshot.
///
/// Stale `image_url`/`error` values are ignored outside the status that
/// makes them meaningful.
#[must_use]
pub fn select_face(state: &CardState) -> Face<'_> {
    match state.status() {
        CardStatus::Error => Face::Error {
            message: state.error_message(),
        },
        CardStatus::Done => match state.image_url() {
            Some(url) => Face::Image { url },
            None => Face::Placeholder {
                caption: state.caption(),
            },
        },
        CardStatus::Pending => Face::Loading,
    }
}
