// SPDX-License-Identifier: MPL-2.0
//! Capability-gated action affordances.
//!
//! The set of visible actions is derived once from the face and from which
//! handlers were supplied. Rendering code iterates the set instead of
//! repeating null checks in every branch.

use super::{Caption, Face};

/// A user-actionable control on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Affordance {
    /// "Try again" button on the error face.
    Retry,
    /// Regenerate button on the image face.
    Regenerate,
    /// Download button on the image face.
    Download,
    /// Share button on the image face.
    Share,
}

impl Affordance {
    /// Display order of the image-face actions.
    pub const IMAGE_ACTIONS: [Affordance; 3] = [
        Affordance::Regenerate,
        Affordance::Download,
        Affordance::Share,
    ];

    /// Maps the affordance to the intent it emits for `caption`.
    ///
    /// Retry and Regenerate share one intent.
    #[must_use]
    pub fn intent(self, caption: Caption) -> CardIntent {
        match self {
            Affordance::Retry | Affordance::Regenerate => CardIntent::Regenerate(caption),
            Affordance::Download => CardIntent::Download(caption),
            Affordance::Share => CardIntent::Share(caption),
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Affordance::Retry => 1,
            Affordance::Regenerate => 1 << 1,
            Affordance::Download => 1 << 2,
            Affordance::Share => 1 << 3,
        }
    }
}

/// A user intent forwarded upward, keyed by the originating card.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CardIntent {
    Regenerate(Caption),
    Download(Caption),
    Share(Caption),
}

impl CardIntent {
    /// The caption of the card that emitted the intent.
    #[must_use]
    pub fn caption(&self) -> &Caption {
        match self {
            CardIntent::Regenerate(caption)
            | CardIntent::Download(caption)
            | CardIntent::Share(caption) => caption,
        }
    }
}

/// Which intent handlers the caller supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub regenerate: bool,
    pub download: bool,
    pub share: bool,
}

impl Capabilities {
    /// Derives capabilities from the presence of optional handlers.
    #[must_use]
    pub fn from_handlers<R, D, S>(regenerate: &Option<R>, download: &Option<D>, share: &Option<S>) -> Self {
        Self {
            regenerate: regenerate.is_some(),
            download: download.is_some(),
            share: share.is_some(),
        }
    }

    fn allows(self, affordance: Affordance) -> bool {
        match affordance {
            Affordance::Retry => true,
            Affordance::Regenerate => self.regenerate,
            Affordance::Download => self.download,
            Affordance::Share => self.share,
        }
    }
}

/// Small ordered set of affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AffordanceSet(u8);

impl AffordanceSet {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, affordance: Affordance) {
        self.0 |= affordance.bit();
    }

    #[must_use]
    pub fn contains(self, affordance: Affordance) -> bool {
        self.0 & affordance.bit() != 0
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates members in display order.
    pub fn iter(self) -> impl Iterator<Item = Affordance> {
        [
            Affordance::Retry,
            Affordance::Regenerate,
            Affordance::Download,
            Affordance::Share,
        ]
        .into_iter()
        .filter(move |a| self.contains(*a))
    }
}

impl FromIterator<Affordance> for AffordanceSet {
    fn from_iter<I: IntoIterator<Item = Affordance>>(iter: I) -> Self {
        let mut set = Self::empty();
        for affordance in iter {
            set.insert(affordance);
        }
        set
    }
}

/// Derives the visible affordances for a face.
///
/// - Error: exactly one Retry, whether or not a regenerate handler exists.
/// - Image: the supplied subset of Regenerate, Download, Share.
/// - Placeholder and Loading: nothing.
#[must_use]
pub fn available_affordances(face: &Face<'_>, capabilities: Capabilities) -> AffordanceSet {
    match face {
        Face::Error { .. } => [Affordance::Retry].into_iter().collect(),
        Face::Image { .. } => Affordance::IMAGE_ACTIONS
            .into_iter()
            .filter(|a| capabilities.allows(*a))
            .collect(),
        Face::Placeholder { .. } | Face::Loading => AffordanceSet::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(regenerate: bool, download: bool, share: bool) -> Capabilities {
        Capabilities {
            regenerate,
            download,
            share,
        }
    }

    #[test]
    fn image_face_shows_exactly_the_supplied_handlers() {
        let face = Face::Image { url: "memory://a" };
        for bits in 0u8..8 {
            let c = caps(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
            let set = available_affordances(&face, c);

            assert_eq!(set.contains(Affordance::Regenerate), c.regenerate);
            assert_eq!(set.contains(Affordance::Download), c.download);
            assert_eq!(set.contains(Affordance::Share), c.share);
            assert!(!set.contains(Affordance::Retry));
        }
    }

    #[test]
    fn error_face_always_has_one_retry() {
        let face = Face::Error { message: None };
        for c in [caps(false, false, false), caps(true, true, true)] {
            let set = available_affordances(&face, c);
            assert_eq!(set.len(), 1);
            assert!(set.contains(Affordance::Retry));
        }
    }

    #[test]
    fn placeholder_and_loading_show_nothing() {
        let caption = Caption::new("1950s");
        let all = caps(true, true, true);
        assert!(available_affordances(&Face::Placeholder { caption: &caption }, all).is_empty());
        assert!(available_affordances(&Face::Loading, all).is_empty());
    }

    #[test]
    fn retry_and_regenerate_share_an_intent() {
        let caption = Caption::new("1960s");
        assert_eq!(
            Affordance::Retry.intent(caption.clone()),
            Affordance::Regenerate.intent(caption.clone())
        );
        assert_eq!(Affordance::Share.intent(caption.clone()).caption(), &caption);
    }

    #[test]
    fn set_iterates_in_display_order() {
        let set: AffordanceSet = [Affordance::Share, Affordance::Regenerate].into_iter().collect();
        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, vec![Affordance::Regenerate, Affordance::Share]);
    }

    #[test]
    fn capabilities_follow_handler_presence() {
        let present: Option<fn()> = Some(|| {});
        let absent: Option<fn()> = None;
        assert_eq!(
            Capabilities::from_handlers(&present, &absent, &present),
            caps(true, false, true)
        );
    }
}
