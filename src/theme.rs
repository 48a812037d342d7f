//! Theme preference model.
//!
//! DESIGN
//! ======
//! The persisted slot is a free-form string owned by the browser, so parsing
//! is total: exactly `"enabled"` is dark and everything else, including a
//! missing key, is light.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

/// Stored value that marks dark mode as active.
pub const ENABLED: &str = "enabled";

/// Which visual variant is active on the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    /// Default styling; no marker class on the root container.
    #[default]
    Light,
    /// Dark variant; marker class present on the root container.
    Dark,
}

impl ThemePreference {
    /// Map a raw stored value to a preference.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(ENABLED) => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Value to persist for this preference. `None` means the slot is cleared.
    pub fn stored_value(self) -> Option<&'static str> {
        match self {
            Self::Dark => Some(ENABLED),
            Self::Light => None,
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The other state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dark => "dark",
            Self::Light => "light",
        })
    }
}
