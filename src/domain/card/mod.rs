// SPDX-License-Identifier: MPL-2.0
//! Card lifecycle types.
//!
//! A card is one generation request rendered as a polaroid. Its state is
//! produced by the orchestrator and handed to the presenter as an immutable
//! snapshot on every render. The presenter only reads it.
//!
//! # Lifecycle
//!
//! ```text
//!            complete()            fail()
//! Pending ──────────────► Done    Pending ──────────► Error
//!    ▲                      │        ▲                  │
//!    └──── begin_regenerate ┘        └─ begin_regenerate┘
//! ```
//!
//! The caption is the card's identity and never changes across transitions.

mod affordance;
mod face;
mod transition;

pub use affordance::{available_affordances, Affordance, AffordanceSet, Capabilities, CardIntent};
pub use face::{select_face, Face};
pub use transition::Transition;

use std::fmt;

// =============================================================================
// Caption
// =============================================================================

/// Stable identity of a card, threaded back through every intent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Caption(String);

impl Caption {
    /// Creates a caption from any string-like value.
    pub fn new(caption: impl Into<String>) -> Self {
        Self(caption.into())
    }

    /// Returns the caption text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Caption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Caption {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Caption {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Caption {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// =============================================================================
// CardStatus
// =============================================================================

/// Generation status of a card. Exactly one holds at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardStatus {
    /// Generation requested, result not known yet.
    Pending,
    /// Generation succeeded (possibly without an image).
    Done,
    /// Generation failed upstream.
    Error,
}

impl CardStatus {
    /// Returns `true` while a generation is in flight.
    #[must_use]
    pub fn is_pending(self) -> bool {
        matches!(self, CardStatus::Pending)
    }

    /// Returns `true` once a result, success or failure, is known.
    #[must_use]
    pub fn is_settled(self) -> bool {
        !self.is_pending()
    }
}

// =============================================================================
// CardState
// =============================================================================

/// Snapshot of one card as supplied by the orchestrator.
///
/// `image_url` and `error` may hold stale values from a previous status; the
/// accessors only expose them when the status makes them meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    caption: Caption,
    status: CardStatus,
    image_url: Option<String>,
    error: Option<String>,
}

impl CardState {
    /// Creates a card with the given status and no image or error.
    pub fn new(caption: impl Into<Caption>, status: CardStatus) -> Self {
        Self {
            caption: caption.into(),
            status,
            image_url: None,
            error: None,
        }
    }

    /// Creates a card waiting for its first result.
    pub fn pending(caption: impl Into<Caption>) -> Self {
        Self::new(caption, CardStatus::Pending)
    }

    /// Creates a finished card, with or without an image.
    pub fn done(caption: impl Into<Caption>, image_url: Option<String>) -> Self {
        Self::new(caption, CardStatus::Done).with_image_url(image_url)
    }

    /// Creates a failed card, with or without a message.
    pub fn failed(caption: impl Into<Caption>, error: Option<String>) -> Self {
        Self::new(caption, CardStatus::Error).with_error(error)
    }

    /// Sets the raw image URL field regardless of status.
    #[must_use]
    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    /// Sets the raw error field regardless of status.
    #[must_use]
    pub fn with_error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }

    #[must_use]
    pub fn caption(&self) -> &Caption {
        &self.caption
    }

    #[must_use]
    pub fn status(&self) -> CardStatus {
        self.status
    }

    /// Image URL, only when the card is done and the URL is non-empty.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        match self.status {
            CardStatus::Done => non_empty(self.image_url.as_deref()),
            CardStatus::Pending | CardStatus::Error => None,
        }
    }

    /// Error message, only when the card failed and the message is non-empty.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self.status {
            CardStatus::Error => non_empty(self.error.as_deref()),
            CardStatus::Pending | CardStatus::Done => None,
        }
    }

    /// Moves the card back to pending for a user-initiated retry.
    ///
    /// Stale image and error fields are kept; they are ignored while pending.
    pub fn begin_regenerate(&mut self) {
        self.status = CardStatus::Pending;
    }

    /// Records a successful generation.
    pub fn complete(&mut self, image_url: Option<String>) {
        self.status = CardStatus::Done;
        self.image_url = image_url;
    }

    /// Records a failed generation.
    pub fn fail(&mut self, error: Option<String>) {
        self.status = CardStatus::Error;
        self.error = error;
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_is_only_exposed_when_done() {
        let stale = Some("memory://abc".to_string());
        let pending = CardState::pending("1950s").with_image_url(stale.clone());
        let failed = CardState::failed("1950s", None).with_image_url(stale.clone());
        let done = CardState::done("1950s", stale);

        assert_eq!(pending.image_url(), None);
        assert_eq!(failed.image_url(), None);
        assert_eq!(done.image_url(), Some("memory://abc"));
    }

    #[test]
    fn error_message_is_only_exposed_when_failed() {
        let stale = Some("boom".to_string());
        assert_eq!(
            CardState::pending("1960s").with_error(stale.clone()).error_message(),
            None
        );
        assert_eq!(
            CardState::done("1960s", None).with_error(stale.clone()).error_message(),
            None
        );
        assert_eq!(CardState::failed("1960s", stale).error_message(), Some("boom"));
    }

    #[test]
    fn empty_strings_degrade_to_absent() {
        assert_eq!(CardState::done("1970s", Some(String::new())).image_url(), None);
        assert_eq!(CardState::failed("1970s", Some(String::new())).error_message(), None);
    }

    #[test]
    fn transitions_keep_the_caption() {
        let mut card = CardState::pending("1980s");
        card.fail(Some("network timeout".into()));
        card.begin_regenerate();
        card.complete(Some("memory://x".into()));

        assert_eq!(card.caption().as_str(), "1980s");
        assert_eq!(card.status(), CardStatus::Done);
        assert_eq!(card.image_url(), Some("memory://x"));
    }

    #[test]
    fn begin_regenerate_returns_to_pending_from_any_status() {
        for mut card in [
            CardState::done("1990s", Some("u".into())),
            CardState::failed("1990s", Some("e".into())),
            CardState::pending("1990s"),
        ] {
            card.begin_regenerate();
            assert!(card.status().is_pending());
        }
    }

    #[test]
    fn settled_means_not_pending() {
        assert!(!CardStatus::Pending.is_settled());
        assert!(CardStatus::Done.is_settled());
        assert!(CardStatus::Error.is_settled());
    }
}
