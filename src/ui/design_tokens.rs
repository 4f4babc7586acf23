// SPDX-License-Identifier: MPL-2.0
//! Design tokens: the shared color, spacing, sizing, and type scales.
//!
//! ```
//! use comet_planner::ui::design_tokens::{palette, spacing};
//! use iced::Color;
//!
//! let scrim = Color { a: 0.5, ..palette::BLACK };
//! let padding = spacing::MD; // 16px
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_800: Color = Color::from_rgb(0.16, 0.18, 0.2); // footer caption band
    pub const GRAY_700: Color = Color::from_rgb(0.22, 0.25, 0.29); // footer body
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.9, 0.91, 0.92);
    pub const GRAY_100: Color = Color::from_rgb(0.95, 0.96, 0.96);

    // App bar blue
    pub const PRIMARY_400: Color = Color::from_rgb(0.36, 0.51, 0.93);
    pub const PRIMARY_500: Color = Color::from_rgb(0.25, 0.32, 0.71);
    pub const PRIMARY_600: Color = Color::from_rgb(0.19, 0.25, 0.62);

    pub const ACCENT_500: Color = Color::from_rgb(0.96, 0.0, 0.34); // selected tab underline

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of the selected-tab indicator bar.
    pub const TAB_INDICATOR: f32 = 2.0;
    pub const TAB_MIN_WIDTH: f32 = 120.0;

    pub const DIALOG_WIDTH: f32 = 420.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Content width cap for the footer columns.
    pub const FOOTER_MAX_WIDTH: f32 = 1152.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page headings
    pub const TITLE_LG: f32 = 30.0;
    /// Toolbar plan title
    pub const TITLE_MD: f32 = 20.0;
    /// Footer column headings, dialog title
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

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
}

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
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
    fn footer_background_is_darker_than_caption_text() {
        assert!(palette::GRAY_700.r < palette::GRAY_200.r);
        assert!(palette::GRAY_800.r < palette::GRAY_700.r);
    }
}
