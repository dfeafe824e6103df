// SPDX-License-Identifier: MPL-2.0
//! Card collection orchestration.
//!
//! The gallery owns the lifecycle of every card: it moves cards into
//! `Pending` when a generation is launched and settles them when the result
//! comes back. Each launch bumps a per-card attempt counter so that a result
//! from a superseded attempt never overwrites a newer one.

use crate::application::port::{GeneratedImage, GenerationError};
use crate::domain::card::{Caption, CardState, CardStatus};
use crate::domain::progress::GenerationProgress;
use crate::ui::polaroid_card::{EntranceAnimation, FlipAnimation, FlipFrame};
use iced::widget::image;
use std::time::Instant;

/// Identifies one generation launch for a card.
pub type Attempt = u64;

/// One card and the data the shell keeps alongside its state.
#[derive(Debug, Clone)]
pub struct CardEntry {
    state: CardState,
    image: Option<GeneratedImage>,
    handle: Option<image::Handle>,
    flip: FlipAnimation,
    attempt: Attempt,
    appeared: Instant,
}

impl CardEntry {
    fn pending(caption: Caption, now: Instant) -> Self {
        Self {
            state: CardState::pending(caption),
            image: None,
            handle: None,
            flip: FlipAnimation::new(CardStatus::Pending, now),
            attempt: 0,
            appeared: now,
        }
    }

    #[must_use]
    pub fn state(&self) -> &CardState {
        &self.state
    }

    #[must_use]
    pub fn caption(&self) -> &Caption {
        self.state.caption()
    }

    /// The last successfully generated image, kept across regenerations.
    #[must_use]
    pub fn image(&self) -> Option<&GeneratedImage> {
        self.image.as_ref()
    }

    /// Cached image handle. Reused on every render so the image is not reloaded.
    #[must_use]
    pub fn handle(&self) -> Option<&image::Handle> {
        self.handle.as_ref()
    }

    #[must_use]
    pub fn attempt(&self) -> Attempt {
        self.attempt
    }

    #[must_use]
    pub fn flip_frame(&self, now: Instant) -> FlipFrame {
        self.flip.frame(now)
    }

    #[must_use]
    pub fn entrance(&self, now: Instant) -> EntranceAnimation {
        EntranceAnimation::at(self.appeared, now)
    }

    fn needs_ticks(&self, now: Instant) -> bool {
        self.flip.needs_ticks(now) || !self.entrance(now).is_finished()
    }

    fn begin(&mut self, now: Instant) -> Attempt {
        self.attempt += 1;
        self.state.begin_regenerate();
        self.flip.observe(self.state.status(), now);
        self.attempt
    }

    fn settle(&mut self, result: Result<GeneratedImage, GenerationError>, now: Instant) {
        match result {
            Ok(image) => {
                if self.image.as_ref().map(GeneratedImage::url) != Some(image.url()) {
                    self.handle = Some(image::Handle::from_bytes(image.bytes().to_vec()));
                }
                self.state.complete(Some(image.url().to_string()));
                self.image = Some(image);
            }
            Err(err) => self.state.fail(Some(err.to_string())),
        }
        self.flip.observe(self.state.status(), now);
    }
}

/// Ordered collection of cards keyed by caption.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    cards: Vec<CardEntry>,
}

impl Gallery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the gallery with one pending card per caption.
    ///
    /// Duplicate captions are dropped. Returns the attempts to launch.
    pub fn start<I>(&mut self, captions: I, now: Instant) -> Vec<(Caption, Attempt)>
    where
        I: IntoIterator<Item = Caption>,
    {
        self.cards.clear();
        let mut launches = Vec::new();
        for caption in captions {
            if self.position(&caption).is_some() {
                continue;
            }
            let mut entry = CardEntry::pending(caption.clone(), now);
            let attempt = entry.begin(now);
            launches.push((caption, attempt));
            self.cards.push(entry);
        }
        launches
    }

    /// Moves an existing card back to `Pending` and returns the new attempt.
    ///
    /// Returns `None` when the caption is unknown.
    pub fn begin(&mut self, caption: &Caption, now: Instant) -> Option<Attempt> {
        let index = self.position(caption)?;
        Some(self.cards[index].begin(now))
    }

    /// Settles a card with a generation result.
    ///
    /// Returns `false` when the result belongs to an unknown card or to a
    /// superseded attempt; such results are dropped.
    pub fn finish(
        &mut self,
        caption: &Caption,
        attempt: Attempt,
        result: Result<GeneratedImage, GenerationError>,
        now: Instant,
    ) -> bool {
        let Some(index) = self.position(caption) else {
            return false;
        };
        let entry = &mut self.cards[index];
        if entry.attempt != attempt || !entry.state.status().is_pending() {
            return false;
        }
        entry.settle(result, now);
        true
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    #[must_use]
    pub fn get(&self, caption: &Caption) -> Option<&CardEntry> {
        self.cards.iter().find(|entry| entry.caption() == caption)
    }

    pub fn cards(&self) -> impl Iterator<Item = &CardEntry> {
        self.cards.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether any card is still waiting for its result.
    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.cards.iter().any(|entry| entry.state.status().is_pending())
    }

    /// Settled cards out of all cards.
    #[must_use]
    pub fn progress(&self) -> GenerationProgress {
        let settled = self
            .cards
            .iter()
            .filter(|entry| entry.state.status().is_settled())
            .count();
        GenerationProgress::from_counts(settled, self.cards.len())
    }

    /// Whether any card is animating at `now`.
    #[must_use]
    pub fn needs_ticks(&self, now: Instant) -> bool {
        self.cards.iter().any(|entry| entry.needs_ticks(now))
    }

    fn position(&self, caption: &Caption) -> Option<usize> {
        self.cards.iter().position(|entry| entry.caption() == caption)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::polaroid_card::FLIP_DURATION;

    fn captions(names: &[&str]) -> Vec<Caption> {
        names.iter().map(|name| Caption::new(*name)).collect()
    }

    #[test]
    fn start_launches_one_attempt_per_unique_caption() {
        let mut gallery = Gallery::new();
        let launches = gallery.start(captions(&["1950s", "1960s", "1950s"]), Instant::now());

        assert_eq!(launches.len(), 2);
        assert_eq!(gallery.len(), 2);
        assert!(gallery.is_generating());
        assert_eq!(gallery.progress().rounded(), 0);
    }

    #[test]
    fn progress_counts_settled_cards() {
        let now = Instant::now();
        let mut gallery = Gallery::new();
        let launches = gallery.start(captions(&["1950s", "1960s"]), now);

        let (caption, attempt) = &launches[0];
        assert!(gallery.finish(caption, *attempt, Err(GenerationError::Timeout), now));
        assert_eq!(gallery.progress().rounded(), 50);

        let (caption, attempt) = &launches[1];
        let image = GeneratedImage::from_bytes(vec![1u8, 2, 3]);
        assert!(gallery.finish(caption, *attempt, Ok(image), now));
        assert!(gallery.progress().is_complete());
        assert!(!gallery.is_generating());
    }

    #[test]
    fn superseded_result_is_dropped() {
        let now = Instant::now();
        let mut gallery = Gallery::new();
        let launches = gallery.start(captions(&["1970s"]), now);
        let (caption, first) = launches[0].clone();

        let second = gallery.begin(&caption, now).expect("card exists");
        assert_ne!(first, second);

        let stale = GeneratedImage::from_bytes(vec![9u8]);
        assert!(!gallery.finish(&caption, first, Ok(stale), now));
        assert_eq!(gallery.get(&caption).map(|e| e.state().status()), Some(CardStatus::Pending));

        assert!(gallery.finish(&caption, second, Err(GenerationError::EmptyImage), now));
        let entry = gallery.get(&caption).expect("card exists");
        assert_eq!(entry.state().error_message(), Some("Generator returned no image"));
    }

    #[test]
    fn unknown_caption_is_ignored() {
        let mut gallery = Gallery::new();
        assert_eq!(gallery.begin(&Caption::new("1980s"), Instant::now()), None);
        assert!(!gallery.finish(
            &Caption::new("1980s"),
            1,
            Err(GenerationError::Timeout),
            Instant::now()
        ));
    }

    #[test]
    fn handle_is_reused_for_identical_bytes() {
        let now = Instant::now();
        let mut gallery = Gallery::new();
        let launches = gallery.start(captions(&["1990s"]), now);
        let (caption, attempt) = launches[0].clone();

        gallery.finish(&caption, attempt, Ok(GeneratedImage::from_bytes(vec![7u8; 4])), now);
        let first = gallery.get(&caption).and_then(CardEntry::handle).cloned();

        let attempt = gallery.begin(&caption, now).expect("card exists");
        gallery.finish(&caption, attempt, Ok(GeneratedImage::from_bytes(vec![7u8; 4])), now);
        let second = gallery.get(&caption).and_then(CardEntry::handle).cloned();

        assert!(first.is_some());
        assert_eq!(first.map(|h| h.id()), second.map(|h| h.id()));
    }

    #[test]
    fn regenerate_keeps_previous_image_until_result() {
        let now = Instant::now();
        let mut gallery = Gallery::new();
        let launches = gallery.start(captions(&["2000s"]), now);
        let (caption, attempt) = launches[0].clone();
        gallery.finish(&caption, attempt, Ok(GeneratedImage::from_bytes(vec![1u8])), now);

        gallery.begin(&caption, now);
        let entry = gallery.get(&caption).expect("card exists");
        assert!(entry.state().status().is_pending());
        assert_eq!(entry.state().image_url(), None);
        assert!(entry.image().is_some());
    }

    #[test]
    fn ticks_stop_once_settled_and_flipped() {
        let now = Instant::now();
        let mut gallery = Gallery::new();
        let launches = gallery.start(captions(&["1950s"]), now);
        assert!(gallery.needs_ticks(now));

        let (caption, attempt) = launches[0].clone();
        gallery.finish(&caption, attempt, Err(GenerationError::Timeout), now);
        let later = now + FLIP_DURATION * 2;
        assert!(!gallery.needs_ticks(later));
    }
}
