// SPDX-License-Identifier: MPL-2.0
//! Footer bar with the credit line, the "Share Website" action, and a link
//! to the site.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Everything the footer needs from the application.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub site_label: &'a str,
    /// Compact layouts drop the credit line.
    pub compact: bool,
}

/// Messages the footer buttons publish.
#[derive(Debug, Clone)]
pub struct Actions<Message> {
    pub share_website: Message,
    pub open_site: Message,
}

pub fn view<'a, Message: Clone + 'a>(
    ctx: ViewContext<'a>,
    actions: Actions<Message>,
) -> Element<'a, Message> {
    let share = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icons::sized(icons::share(), typography::BODY))
            .push(Text::new(ctx.i18n.tr("footer-share-website")).size(typography::BODY_SM)),
    )
    .on_press(actions.share_website)
    .padding([spacing::XXS, spacing::SM])
    .style(styles::button::tape);

    let site = button(Text::new(ctx.site_label.to_string()).size(typography::BODY_SM))
        .on_press(actions.open_site.clone())
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::outline);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);

    if !ctx.compact {
        row = row.push(
            Row::new()
                .spacing(spacing::XXS)
                .align_y(alignment::Vertical::Center)
                .push(Text::new(ctx.i18n.tr("footer-developed-by")).size(typography::BODY_SM))
                .push(
                    button(Text::new(ctx.site_label.to_string()).size(typography::BODY_SM))
                        .on_press(actions.open_site)
                        .padding(0)
                        .style(styles::button::link),
                ),
        );
    }

    row = row
        .push(Space::new().width(Length::Fill))
        .push(share)
        .push(site);

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::footer_bar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Message {
        ShareWebsite,
        OpenSite,
    }

    #[test]
    fn footer_builds_in_both_layouts() {
        let i18n = I18n::default();
        for compact in [false, true] {
            let ctx = ViewContext {
                i18n: &i18n,
                site_label: "Past Forward",
                compact,
            };
            let actions = Actions {
                share_website: Message::ShareWebsite,
                open_site: Message::OpenSite,
            };
            let _element: Element<'_, Message> = view(ctx, actions);
        }
    }
}
