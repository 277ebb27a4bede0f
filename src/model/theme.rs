//! Light/dark theme preference.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Key under which the theme is persisted.
pub const THEME_KEY: &str = "theme";

/// The value was not `"light"` or `"dark"`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown theme '{0}', expected 'light' or 'dark'")]
pub struct UnknownTheme(pub String);

/// Light or dark color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

impl ThemePreference {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Stored string value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Derive a theme from the terminal's `COLORFGBG` signal (`"fg;bg"` or `"fg;default;bg"`).
    ///
    /// Background colors 0-6 and 8 are the dark half of the 16-color palette.
    /// Returns `None` when the signal is missing or unparseable.
    pub fn from_colorfgbg(value: &str) -> Option<Self> {
        let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
        match background {
            0..=6 | 8 => Some(Self::Dark),
            7 | 9..=15 => Some(Self::Light),
            _ => None,
        }
    }

    /// Read the system-level signal from the environment.
    pub fn from_system() -> Option<Self> {
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|value| Self::from_colorfgbg(&value))
    }
}

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_flips_between_themes() {
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
    }

    #[test]
    fn parses_stored_values() {
        assert_eq!("light".parse(), Ok(ThemePreference::Light));
        assert_eq!("Dark".parse(), Ok(ThemePreference::Dark));
        assert!("solarized".parse::<ThemePreference>().is_err());
    }

    #[test]
    fn colorfgbg_dark_background() {
        assert_eq!(
            ThemePreference::from_colorfgbg("15;0"),
            Some(ThemePreference::Dark)
        );
        assert_eq!(
            ThemePreference::from_colorfgbg("12;default;8"),
            Some(ThemePreference::Dark)
        );
    }

    #[test]
    fn colorfgbg_light_background() {
        assert_eq!(
            ThemePreference::from_colorfgbg("0;15"),
            Some(ThemePreference::Light)
        );
        assert_eq!(
            ThemePreference::from_colorfgbg("0;7"),
            Some(ThemePreference::Light)
        );
    }

    #[test]
    fn colorfgbg_garbage_is_none() {
        assert_eq!(ThemePreference::from_colorfgbg(""), None);
        assert_eq!(ThemePreference::from_colorfgbg("0;default"), None);
        assert_eq!(ThemePreference::from_colorfgbg("0;200"), None);
    }
}
