//! Light/dark colour theme.
//!
//! The choice is stored in localStorage and applied as a `data-theme`
//! attribute on `<html>`; the stylesheets key every colour off it.

use std::fmt;

use crate::config::THEME_KEY;
use crate::utils::{dom, log, storage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored theme, if the user has picked one.
pub fn load() -> Option<Theme> {
    storage::get_raw(THEME_KEY).and_then(|v| Theme::parse(&v))
}

pub fn save(theme: Theme) {
    if let Err(e) = storage::set_raw(THEME_KEY, theme.as_str()) {
        log::warn(&format!("Theme not saved: {}", e));
    }
}

/// Set `data-theme` on the document root.
pub fn apply(theme: Theme) {
    if let Some(root) = dom::document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse(" Light "), Some(Theme::Light));
        assert_eq!(Theme::parse("solarized"), None);
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert!(Theme::Dark.is_dark());
        assert_eq!(Theme::default().to_string(), "light");
    }
}
