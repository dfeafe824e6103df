// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::{Background, Theme};
    use past_forward::ui::design_tokens::{motion, palette, sizing, spacing};
    use past_forward::ui::styles::{button, container};

    #[test]
    fn all_button_styles_are_callable() {
        let theme = Theme::Dark;
        for status in [
            Status::Active,
            Status::Hovered,
            Status::Pressed,
            Status::Disabled,
        ] {
            let _ = button::tape(&theme, status);
            let _ = button::outline(&theme, status);
            let _ = button::card_action(&theme, status);
            let _ = button::link(&theme, status);
        }
    }

    #[test]
    fn all_container_styles_are_callable() {
        let theme = Theme::Dark;
        let _ = container::backdrop(&theme);
        let _ = container::polaroid_frame(&theme);
        let _ = container::photo_well(&theme);
        let _ = container::error_face(&theme);
        let _ = container::progress_track(&theme);
        let _ = container::progress_fill(&theme);
        let _ = container::footer_bar(&theme);
        let _ = container::fade_veil(0.5)(&theme);
    }

    #[test]
    fn card_frame_contains_photo_and_caption() {
        let inner = sizing::PHOTO_HEIGHT + spacing::MD + sizing::CAPTION_ROW_HEIGHT;
        assert!(inner + 2.0 * spacing::MD <= sizing::CARD_HEIGHT);
    }

    #[test]
    fn progress_fill_matches_start_button() {
        let fill = container::progress_fill(&Theme::Dark);
        let start = button::tape(&Theme::Dark, Status::Active);
        assert_eq!(fill.background, start.background);
        assert_eq!(fill.background, Some(Background::Color(palette::ACCENT_400)));
    }

    #[test]
    fn flip_is_slower_than_entrance() {
        assert!(motion::FLIP_MS > motion::ENTRANCE_MS);
        assert!(motion::TICK_MS < motion::ENTRANCE_MS);
    }
}
