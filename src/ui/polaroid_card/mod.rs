// SPDX-License-Identifier: MPL-2.0
//! Polaroid card presenter.
//!
//! Renders one card from a [`CardState`] snapshot: a photo area showing
//! exactly one face, and a caption row with the actions the caller can
//! handle. The card owns no lifecycle state; every user action is turned
//! into a message carrying the card's caption.
//!
//! # Usage
//!
//! ```ignore
//! PolaroidCard::new(&state, &labels)
//!     .on_regenerate(|caption| Message::Intent(CardIntent::Regenerate(caption)))
//!     .on_download(|caption| Message::Intent(CardIntent::Download(caption)))
//!     .image(handle)
//!     .flip(animation.frame(now))
//!     .interaction(InteractionMode::select(is_mobile, entrance, thresholds))
//!     .view()
//! ```

mod faces;
mod flip;
mod interaction;

pub use flip::{FlipAnimation, FlipFrame, FLIP_DURATION};
pub use interaction::{EntranceAnimation, InteractionMode, ENTRANCE_DURATION};

use crate::domain::card::{
    available_affordances, select_face, Affordance, AffordanceSet, Capabilities, Caption,
    CardState, Face,
};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::{image, Column, Container};
use iced::{Element, Length};

/// Translated strings used on a card, resolved once per view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLabels {
    pub developing: String,
    pub error_default: String,
    pub retry: String,
    pub regenerate: String,
    pub download: String,
    pub share: String,
}

impl CardLabels {
    #[must_use]
    pub fn new(i18n: &I18n) -> Self {
        Self {
            developing: i18n.tr("card-developing"),
            error_default: i18n.tr("card-error-default"),
            retry: i18n.tr("card-retry"),
            regenerate: i18n.tr("card-action-regenerate"),
            download: i18n.tr("card-action-download"),
            share: i18n.tr("card-action-share"),
        }
    }
}

type Handler<'a, Message> = Box<dyn Fn(Caption) -> Message + 'a>;

/// Builder for one polaroid card.
pub struct PolaroidCard<'a, Message> {
    state: &'a CardState,
    labels: &'a CardLabels,
    on_regenerate: Option<Handler<'a, Message>>,
    on_download: Option<Handler<'a, Message>>,
    on_share: Option<Handler<'a, Message>>,
    image: Option<image::Handle>,
    flip: Option<FlipFrame>,
    interaction: InteractionMode,
}

impl<'a, Message: Clone + 'a> PolaroidCard<'a, Message> {
    pub fn new(state: &'a CardState, labels: &'a CardLabels) -> Self {
        Self {
            state,
            labels,
            on_regenerate: None,
            on_download: None,
            on_share: None,
            image: None,
            flip: None,
            interaction: InteractionMode::default(),
        }
    }

    /// Handles the retry button, the regenerate button and the shake gesture.
    #[must_use]
    pub fn on_regenerate(mut self, f: impl Fn(Caption) -> Message + 'a) -> Self {
        self.on_regenerate = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_download(mut self, f: impl Fn(Caption) -> Message + 'a) -> Self {
        self.on_download = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_share(mut self, f: impl Fn(Caption) -> Message + 'a) -> Self {
        self.on_share = Some(Box::new(f));
        self
    }

    /// Supplies a pre-built handle for the image face.
    ///
    /// Passing the same handle on every render keeps the image from reloading.
    /// Without one, the image face falls back to the placeholder.
    #[must_use]
    pub fn image(mut self, handle: image::Handle) -> Self {
        self.image = Some(handle);
        self
    }

    /// Current flip frame. Defaults to the resting frame for the status.
    #[must_use]
    pub fn flip(mut self, frame: FlipFrame) -> Self {
        self.flip = Some(frame);
        self
    }

    #[must_use]
    pub fn interaction(mut self, mode: InteractionMode) -> Self {
        self.interaction = mode;
        self
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::from_handlers(&self.on_regenerate, &self.on_download, &self.on_share)
    }

    /// Actions visible for the current state.
    #[must_use]
    pub fn affordances(&self) -> AffordanceSet {
        available_affordances(&select_face(self.state), self.capabilities())
    }

    /// Handle the photo area renders, if the image face is showing.
    #[must_use]
    pub fn image_source(&self) -> Option<&image::Handle> {
        match select_face(self.state) {
            Face::Image { .. } => self.image.as_ref(),
            Face::Error { .. } | Face::Placeholder { .. } | Face::Loading => None,
        }
    }

    /// The single regenerate entry point shared by retry, regenerate and shake.
    #[must_use]
    pub fn request_regenerate(&self) -> Option<Message> {
        self.on_regenerate
            .as_ref()
            .map(|f| f(self.state.caption().clone()))
    }

    /// Message emitted by `affordance`, or `None` when it is not shown or
    /// has no handler.
    #[must_use]
    pub fn message_for(&self, affordance: Affordance) -> Option<Message> {
        if !self.affordances().contains(affordance) {
            return None;
        }
        let caption = || self.state.caption().clone();
        match affordance {
            Affordance::Retry | Affordance::Regenerate => self.request_regenerate(),
            Affordance::Download => self.on_download.as_ref().map(|f| f(caption())),
            Affordance::Share => self.on_share.as_ref().map(|f| f(caption())),
        }
    }

    pub fn view(self) -> Element<'a, Message> {
        let face = select_face(self.state);
        let affordances = available_affordances(&face, self.capabilities());
        let flip = self
            .flip
            .unwrap_or_else(|| FlipFrame::resting(self.state.status()));

        let retry = if affordances.contains(Affordance::Retry) {
            self.request_regenerate()
        } else {
            None
        };

        let photo = faces::photo(
            face,
            self.state.caption(),
            flip,
            self.labels,
            self.image.clone(),
            retry,
        );
        let caption_row = faces::caption_row(
            self.state.caption(),
            self.labels,
            affordances,
            |affordance| self.message_for(affordance),
        );

        let card = Container::new(
            Column::new()
                .spacing(spacing::MD)
                .push(photo)
                .push(caption_row),
        )
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .height(Length::Fixed(sizing::CARD_HEIGHT))
        .padding(spacing::MD)
        .style(styles::container::polaroid_frame);

        let on_shake = if self.interaction.is_draggable() {
            self.request_regenerate()
        } else {
            None
        };

        self.interaction.wrap(card, on_shake)
    }
}
