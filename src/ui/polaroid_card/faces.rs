// SPDX-License-Identifier: MPL-2.0
//! Rendering of the card faces and the caption row.

use super::{CardLabels, FlipFrame};
use crate::domain::card::{Affordance, AffordanceSet, Caption, Face};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles::{self, tooltip};
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, container, image, svg, Column, Container, Row, Space, Svg, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};

/// Width of the photo well inside the frame.
pub(super) const PHOTO_WIDTH: f32 = sizing::CARD_WIDTH - 2.0 * spacing::MD;

/// The photo area: front or back face squeezed by the flip.
pub(super) fn photo<'a, Message: Clone + 'a>(
    face: Face<'_>,
    caption: &Caption,
    flip: FlipFrame,
    labels: &CardLabels,
    image_handle: Option<image::Handle>,
    retry: Option<Message>,
) -> Element<'a, Message> {
    let visible: Element<'a, Message> = if flip.showing_back {
        back(labels, flip.spinner_rotation)
    } else {
        front(face, caption, labels, image_handle, retry)
    };

    let width = (PHOTO_WIDTH * flip.width_factor()).max(0.0);

    Container::new(
        Container::new(visible)
            .width(Length::Fixed(width))
            .height(Length::Fill)
            .clip(true)
            .style(styles::container::photo_well),
    )
    .width(Length::Fixed(PHOTO_WIDTH))
    .height(Length::Fixed(sizing::PHOTO_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .into()
}

/// Text shown on the error face: the failure message verbatim, or the
/// default label when there is none. `None` for every other face.
pub(super) fn error_text<'a>(face: &Face<'a>, labels: &'a CardLabels) -> Option<&'a str> {
    match face {
        Face::Error { message } => Some(message.unwrap_or(labels.error_default.as_str())),
        Face::Image { .. } | Face::Placeholder { .. } | Face::Loading => None,
    }
}

fn front<'a, Message: Clone + 'a>(
    face: Face<'_>,
    caption: &Caption,
    labels: &CardLabels,
    image_handle: Option<image::Handle>,
    retry: Option<Message>,
) -> Element<'a, Message> {
    match face {
        Face::Error { .. } => {
            let text = error_text(&face, labels).unwrap_or(labels.error_default.as_str());
            error(text, labels, retry)
        }
        Face::Image { .. } => match image_handle {
            Some(handle) => image(handle)
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            // No decoded bytes to show.
            None => placeholder(caption),
        },
        Face::Placeholder { caption } => placeholder(caption),
        // The loading face lives on the back; the front stays blank.
        Face::Loading => Space::new().width(Length::Fill).height(Length::Fill).into(),
    }
}

fn error<'a, Message: Clone + 'a>(
    message: &str,
    labels: &CardLabels,
    retry: Option<Message>,
) -> Element<'a, Message> {
    // Retry stays visually enabled even when nothing handles it.
    let retry_button = button(Text::new(labels.retry.clone()).size(typography::CAPTION))
        .on_press_maybe(retry)
        .padding([spacing::XXS, spacing::SM])
        .style(|theme: &Theme, status| {
            let status = match status {
                button::Status::Disabled => button::Status::Active,
                other => other,
            };
            styles::button::tape(theme, status)
        });

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(icons::tinted(
            icons::sized(icons::alert_triangle(), sizing::ICON_XL),
            palette::ERROR_500,
        ))
        .push(
            Text::new(message.to_string())
                .size(typography::BODY_SM)
                .align_x(alignment::Horizontal::Center),
        )
        .push(retry_button);

    centered(content, styles::container::error_face)
}

fn placeholder<'a, Message: 'a>(caption: &Caption) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(icons::tinted(
            icons::sized(icons::photo(), sizing::ICON_XXL),
            palette::NEUTRAL_400,
        ))
        .push(
            Text::new(caption.to_string())
                .size(typography::BODY_SM)
                .align_x(alignment::Horizontal::Center),
        );

    centered(content, styles::container::photo_well)
}

/// The "developing" side shown while a card is pending.
fn back<'a, Message: 'a>(labels: &CardLabels, spinner_rotation: f32) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(AnimatedSpinner::new(palette::NEUTRAL_500, spinner_rotation).into_element())
        .push(
            Text::new(labels.developing.to_uppercase())
                .size(typography::BODY_SM)
                .font(iced::Font::MONOSPACE),
        );

    centered(content, styles::container::photo_well)
}

fn centered<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    style: fn(&Theme) -> container::Style,
) -> Element<'a, Message> {
    Container::new(content)
        .padding(spacing::XS)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(style)
        .into()
}

/// Caption on the left, image actions on the right.
pub(super) fn caption_row<'a, Message: Clone + 'a>(
    caption: &Caption,
    labels: &CardLabels,
    affordances: AffordanceSet,
    message_for: impl Fn(Affordance) -> Option<Message>,
) -> Element<'a, Message> {
    let mut actions = Row::new().spacing(spacing::XS).align_y(alignment::Vertical::Center);
    for affordance in affordances.iter() {
        let (icon, tip) = match affordance {
            Affordance::Regenerate => (icons::refresh(), &labels.regenerate),
            Affordance::Download => (icons::download(), &labels.download),
            Affordance::Share => (icons::share(), &labels.share),
            // Retry lives on the error face.
            Affordance::Retry => continue,
        };
        let action = button(action_icon(icon))
            .on_press_maybe(message_for(affordance))
            .padding(spacing::XXS)
            .style(styles::button::card_action);
        actions = actions.push(tooltip::styled(action, tip.clone(), tooltip::Position::Top));
    }

    Row::new()
        .height(Length::Fixed(sizing::CAPTION_ROW_HEIGHT))
        .padding([0.0, spacing::XXS])
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(caption.to_string())
                .size(typography::TITLE_MD)
                .color(palette::BLACK)
                .wrapping(iced::widget::text::Wrapping::None)
                .width(Length::Fill),
        )
        .push(actions)
        .into()
}

fn action_icon<'a>(icon: Svg<'a>) -> Svg<'a> {
    icons::sized(icon, sizing::ICON_MD).style(|_theme: &Theme, status| svg::Style {
        color: Some(match status {
            svg::Status::Hovered => palette::BLACK,
            svg::Status::Idle => palette::NEUTRAL_600,
        }),
    })
}
