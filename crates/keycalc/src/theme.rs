//! Light/dark presentation flag

use serde::{Deserialize, Serialize};

/// Colour scheme selected by the user; never affects calculation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background, dark text
    #[default]
    Light,
    /// Dark background, light text
    Dark,
}

/// Colours and icon a renderer needs for a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Screen background
    pub background: &'static str,
    /// Text and icon colour
    pub foreground: &'static str,
    /// Icon on the toggle button (names the theme it switches to)
    pub toggle_icon: &'static str,
}

impl Theme {
    /// Returns the other theme
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns true for the dark theme
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Returns the lowercase theme name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Returns the palette for this theme
    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                background: "#ffffff",
                foreground: "#000000",
                toggle_icon: "moon",
            },
            Self::Dark => Palette {
                background: "#333333",
                foreground: "#ffffff",
                toggle_icon: "sun",
            },
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert!(!Theme::default().is_dark());
    }

    #[test]
    fn test_toggled_twice_is_identity() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_palette() {
        assert_eq!(Theme::Light.palette().toggle_icon, "moon");
        assert_eq!(Theme::Dark.palette().toggle_icon, "sun");
        assert_eq!(Theme::Dark.palette().background, "#333333");
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), r#""dark""#);
    }
}
