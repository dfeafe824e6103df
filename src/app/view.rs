// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The screen is a header with the run controls, the progress bar while a
//! run is in flight, the card grid and the footer. Toasts float on top.

use super::gallery::{CardEntry, Gallery};
use super::Message;
use crate::config::Config;
use crate::domain::card::CardIntent;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::footer;
use crate::ui::notifications::{self, Toast};
use crate::ui::polaroid_card::{CardLabels, InteractionMode, PolaroidCard};
use crate::ui::progress_bar;
use crate::ui::state::ShakeThresholds;
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub gallery: &'a Gallery,
    pub labels: &'a CardLabels,
    pub notifications: &'a notifications::Manager,
    pub compact: bool,
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(header(ctx.i18n))
        .push(controls(ctx.i18n, ctx.gallery));

    if ctx.gallery.is_generating() {
        content = content.push(progress_bar::view(ctx.gallery.progress(), ctx.i18n));
    }

    if ctx.gallery.is_empty() {
        content = content.push(
            Text::new(ctx.i18n.tr("app-empty-hint"))
                .size(typography::BODY)
                .color(palette::NEUTRAL_400),
        );
    } else {
        content = content.push(cards(&ctx));
    }

    let page = Column::new()
        .push(
            scrollable(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(footer::view(
            footer::ViewContext {
                i18n: ctx.i18n,
                site_label: &ctx.config.share.site_label,
                compact: ctx.compact,
            },
            footer::Actions {
                share_website: Message::ShareWebsite,
                open_site: Message::OpenSite,
            },
        ));

    let base = Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(toasts)
        .into()
}

fn header<'a>(i18n: &I18n) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(i18n.tr("app-title"))
                .size(typography::TITLE_LG)
                .color(palette::WHITE),
        )
        .push(
            Text::new(i18n.tr("app-tagline"))
                .size(typography::BODY_LG)
                .color(palette::NEUTRAL_300),
        )
        .into()
}

fn controls<'a>(i18n: &I18n, gallery: &Gallery) -> Element<'a, Message> {
    let start = button(Text::new(i18n.tr("app-start-button")).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button_tape)
        .on_press_maybe(gallery.is_empty().then_some(Message::Start));

    let mut row = Row::new().spacing(spacing::SM).push(start);

    if !gallery.is_empty() {
        // Resetting mid-run would orphan the in-flight results.
        let reset = button(Text::new(i18n.tr("app-reset-button")).size(typography::BODY_LG))
            .padding([spacing::SM, spacing::LG])
            .style(styles::button_outline)
            .on_press_maybe((!gallery.is_generating()).then_some(Message::Reset));
        row = row.push(reset);
    }

    row.into()
}

fn cards<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let thresholds = ShakeThresholds::from(&ctx.config.gesture);
    let now = ctx.now;
    let compact = ctx.compact;
    let labels = ctx.labels;

    let cards = ctx
        .gallery
        .cards()
        .map(|entry| card(entry, labels, compact, thresholds, now));

    if compact {
        Column::with_children(cards)
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .into()
    } else {
        Row::with_children(cards)
            .spacing(spacing::XL)
            .wrap()
            .vertical_spacing(spacing::XL)
            .into()
    }
}

fn card<'a>(
    entry: &'a CardEntry,
    labels: &'a CardLabels,
    compact: bool,
    thresholds: ShakeThresholds,
    now: Instant,
) -> Element<'a, Message> {
    let mut card = PolaroidCard::new(entry.state(), labels)
        .on_regenerate(|caption| Message::Intent(CardIntent::Regenerate(caption)))
        .on_download(|caption| Message::Intent(CardIntent::Download(caption)))
        .on_share(|caption| Message::Intent(CardIntent::Share(caption)))
        .flip(entry.flip_frame(now))
        .interaction(InteractionMode::select(
            compact,
            entry.entrance(now),
            thresholds,
        ));

    if let Some(handle) = entry.handle() {
        card = card.image(handle.clone());
    }

    card.view()
}
