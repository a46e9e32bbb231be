// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use ai_gallery::ui::design_tokens::{opacity, palette, sizing, spacing};
    use ai_gallery::ui::notifications::Severity;
    use ai_gallery::ui::styles::{button, container};
    use ai_gallery::ui::theming::ThemeMode;
    use iced::widget::button::Status;
    use iced::Theme;

    #[test]
    fn all_styles_are_callable() {
        let theme = Theme::Dark;

        let _ = button::primary(&theme, Status::Active);
        let _ = button::secondary(&theme, Status::Hovered);
        let _ = button::dismiss(palette::WHITE)(&theme, Status::Pressed);

        let _ = container::panel(&theme);
        let _ = container::card(&theme);
        let _ = container::error_banner(&theme);
    }

    #[test]
    fn active_drop_zone_is_highlighted() {
        let theme = Theme::Light;
        let idle = container::drop_zone(false)(&theme);
        let active = container::drop_zone(true)(&theme);
        assert_ne!(idle.border.color, active.border.color);
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PRIMARY_500;
        let _ = spacing::MD;
        let _ = opacity::OVERLAY_STRONG;
        assert!(sizing::TOAST_WIDTH < sizing::MAX_CONTENT_WIDTH);
    }

    #[test]
    fn severities_use_distinct_accents() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn explicit_theme_modes_map_to_builtin_themes() {
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
    }
}
