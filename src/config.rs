//! Fixed identifiers shared between the page markup, stylesheet, and storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page template renders a control with a well-known id and the
//! stylesheet keys dark rules off a marker class on `<body>`. Both sides must
//! agree with these values, so they live in one place.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::theme::ThemePreference;

/// Configuration for a [`ThemeToggle`](crate::toggle::ThemeToggle).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    /// `localStorage` key holding the preference.
    pub storage_key: String,
    /// Element id of the toggle control.
    pub toggle_id: String,
    /// Class added to `<body>` while dark mode is active.
    pub marker_class: String,
    /// Control markup shown while dark mode is active (offers a switch back to light).
    pub dark_glyph: String,
    /// Control markup shown while light mode is active (offers a switch to dark).
    pub light_glyph: String,
    /// Console log level for the browser build.
    pub log_level: log::Level,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "darkMode".to_owned(),
            toggle_id: "darkModeToggle".to_owned(),
            marker_class: "dark-mode".to_owned(),
            dark_glyph: r#"<i class="bi bi-sun"></i>"#.to_owned(),
            light_glyph: r#"<i class="bi bi-moon-stars"></i>"#.to_owned(),
            log_level: log::Level::Info,
        }
    }
}

impl ThemeConfig {
    /// Glyph markup matching `preference`.
    pub fn glyph_for(&self, preference: ThemePreference) -> &str {
        match preference {
            ThemePreference::Dark => &self.dark_glyph,
            ThemePreference::Light => &self.light_glyph,
        }
    }
}
