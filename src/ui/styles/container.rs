// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Semi-opaque surface derived from the active theme background.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Gallery card.
pub fn card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        border: Border {
            color: extended.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Drop zone outline; highlighted while files hover the window.
pub fn drop_zone(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let extended = theme.extended_palette();
        let (border_color, fill) = if active {
            (
                palette::PRIMARY_500,
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::PRIMARY_100
                },
            )
        } else {
            (extended.background.strong.color, extended.background.base.color)
        };

        container::Style {
            background: Some(Background::Color(fill)),
            border: Border {
                color: border_color,
                width: border::WIDTH_MD,
                radius: radius::LG.into(),
            },
            ..Default::default()
        }
    }
}

/// Dismissible error banner.
pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ERROR_100)),
        text_color: Some(palette::ERROR_700),
        border: Border {
            color: palette::ERROR_500,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
