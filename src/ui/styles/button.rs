// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn disabled_style(is_light: bool) -> button::Style {
    button::Style {
        background: Some(Background::Color(if is_light {
            palette::GRAY_100
        } else {
            palette::GRAY_700
        })),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Main action (Search).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled_style(matches!(theme, Theme::Light)),
    }
}

/// Secondary actions (Show All, Clear).
/// Adapts to light/dark theme.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color, border_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900, palette::GRAY_400)
    } else {
        (palette::GRAY_700, WHITE, palette::GRAY_400)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => {
            let hover_bg = if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            button::Style {
                background: Some(Background::Color(hover_bg)),
                text_color,
                border: Border {
                    color: palette::PRIMARY_500,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::SM,
                snap: true,
            }
        }
        button::Status::Disabled => disabled_style(is_light),
    }
}

/// Borderless text button tinted with `color` (banner and toast dismiss).
pub fn dismiss(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..color
            })),
            _ => None,
        };

        button::Style {
            background,
            text_color: color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn disabled_buttons_are_grayed_out() {
        let primary_style = primary(&Theme::Light, button::Status::Disabled);
        let secondary_style = secondary(&Theme::Light, button::Status::Disabled);
        assert_eq!(primary_style.text_color, palette::GRAY_400);
        assert_eq!(primary_style.background, secondary_style.background);
    }

    #[test]
    fn dismiss_button_only_fills_on_hover() {
        let style_fn = dismiss(palette::ERROR_700);
        let normal = style_fn(&Theme::Light, button::Status::Active);
        let hover = style_fn(&Theme::Light, button::Status::Hovered);

        assert!(normal.background.is_none());
        assert!(hover.background.is_some());
        assert_eq!(normal.text_color, palette::ERROR_700);
    }
}
