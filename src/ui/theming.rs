// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection.

use iced::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Dark on detection error.
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// The iced theme for this mode.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_resolve_without_detection() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
        // Depends on the desktop settings; only checks it does not panic.
        let _ = ThemeMode::System.theme();
    }

    #[test]
    fn mode_serializes_lowercase() {
        let json = serde_json::to_string(&ThemeMode::System).expect("serialize");
        assert_eq!(json, "\"system\"");
    }
}
