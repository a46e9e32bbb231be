// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every gallery widget.
//!
//! - **Palette**: base and semantic colors
//! - **Opacity**: overlay and surface levels
//! - **Spacing**: 8px grid
//! - **Sizing**: component sizes (cards, drop zone, toasts)
//! - **Typography**: font size scale
//! - **Border** / **Radius** / **Shadow**
//!
//! ```
//! use ai_gallery::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let scrim = Color { a: opacity::OVERLAY_MEDIUM, ..palette::BLACK };
//! let gap = spacing::MD;
//! # let _ = (scrim, gap);
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
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand (blue scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.85, 0.92, 1.0);
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Semantic
    pub const ERROR_100: Color = Color::from_rgb(0.98, 0.87, 0.87);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const ERROR_700: Color = Color::from_rgb(0.62, 0.12, 0.11);
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

    /// Semi-transparent panels (toasts, loading scrim).
    pub const SURFACE: f32 = 0.95;
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
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;

    pub const DROP_ZONE_HEIGHT: f32 = 140.0;
    /// Thumbnail height inside a gallery card.
    pub const CARD_IMAGE_HEIGHT: f32 = 180.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const MAX_CONTENT_WIDTH: f32 = 1200.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page heading.
    pub const TITLE_LG: f32 = 30.0;

    /// Empty-state title.
    pub const TITLE_MD: f32 = 20.0;

    /// Card title.
    pub const TITLE_SM: f32 = 18.0;

    /// Inputs and emphasis text.
    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    pub const BODY_SM: f32 = 13.0;

    /// Card metadata labels, counters.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Drop zone outline and toast accents.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

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

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_STRONG > opacity::OVERLAY_MEDIUM);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::CARD_IMAGE_HEIGHT > sizing::BUTTON_HEIGHT);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
