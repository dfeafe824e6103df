// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Motion**: Animation timings
- **Shadow**: Shadow definitions

## Examples

```
use past_forward::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create an overlay color
let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);

    // Neutral scale (photo paper and card frame)
    pub const NEUTRAL_100: Color = Color::from_rgb(0.961, 0.961, 0.961); // Card frame
    pub const NEUTRAL_200: Color = Color::from_rgb(0.898, 0.898, 0.898); // Photo well
    pub const NEUTRAL_300: Color = Color::from_rgb(0.831, 0.831, 0.831);
    pub const NEUTRAL_400: Color = Color::from_rgb(0.639, 0.639, 0.639);
    pub const NEUTRAL_500: Color = Color::from_rgb(0.451, 0.451, 0.451);
    pub const NEUTRAL_600: Color = Color::from_rgb(0.322, 0.322, 0.322);

    // Accent (yellow tape)
    pub const ACCENT_300: Color = Color::from_rgb(0.992, 0.878, 0.278);
    pub const ACCENT_400: Color = Color::from_rgb(0.980, 0.800, 0.082);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const ERROR_600: Color = Color::from_rgb(0.863, 0.149, 0.149);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_FAINT: f32 = 0.1;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 40.0;
    pub const ICON_XXL: f32 = 64.0;

    // Polaroid card
    pub const CARD_WIDTH: f32 = 320.0;
    pub const CARD_HEIGHT: f32 = 416.0;
    /// Photo well inside the frame.
    pub const PHOTO_HEIGHT: f32 = 288.0;
    /// Caption and action row under the photo.
    pub const CAPTION_ROW_HEIGHT: f32 = 40.0;
    pub const SPINNER: f32 = 48.0;

    // Progress bar
    pub const PROGRESS_TRACK_HEIGHT: f32 = 16.0;
    pub const PROGRESS_MAX_WIDTH: f32 = 448.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Titles: app heading and card captions
    //! - Body: labels and buttons
    //! - Caption: secondary text

    /// Large title - App heading
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Card caption
    pub const TITLE_MD: f32 = 24.0;

    /// Small title - Progress label
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Primary buttons
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text
    pub const BODY: f32 = 14.0;

    /// Small body - Error messages and placeholders
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Retry button, footer
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Footer separator, outline buttons
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Progress track, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const XS: f32 = 2.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 6.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    /// Duration of the card flip when entering or leaving the pending state.
    pub const FLIP_MS: u64 = 600;

    /// Duration of the compact-layout slide-in.
    pub const ENTRANCE_MS: u64 = 500;

    /// Vertical distance covered by the slide-in.
    pub const ENTRANCE_OFFSET: f32 = 20.0;

    /// Animation tick period (about 60 frames per second).
    pub const TICK_MS: u64 = 16;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };

    /// Polaroid frame lift.
    pub const XL: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 20.0 },
        blur_radius: 25.0,
    };

    /// Hard offset under the yellow tape buttons.
    pub const TAPE: Shadow = Shadow {
        color: Color {
            a: 0.1,
            ..palette::BLACK
        },
        offset: Vector { x: 1.0, y: 1.0 },
        blur_radius: 0.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::PHOTO_HEIGHT + sizing::CAPTION_ROW_HEIGHT < sizing::CARD_HEIGHT);

    // Motion validation
    assert!(motion::TICK_MS < motion::ENTRANCE_MS);
    assert!(motion::ENTRANCE_MS < motion::FLIP_MS);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::ACCENT_400.r >= 0.0 && palette::ACCENT_400.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn card_frame_fits_photo_and_caption() {
        let inner = sizing::CARD_HEIGHT - 2.0 * spacing::MD;
        assert!(sizing::PHOTO_HEIGHT + spacing::MD + sizing::CAPTION_ROW_HEIGHT <= inner);
    }
}
