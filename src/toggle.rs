//! Dark/light theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two entry points drive this component: [`ThemeToggle::initialize`] once
//! when the document becomes interactive, and
//! [`ThemeToggle::on_toggle_activated`] on every click of the control. The
//! host event loop serializes both, so the component needs no locking.
//!
//! TRADE-OFFS
//! ==========
//! A toggle inverts the theme read back from the root container, not the
//! stored value. With storage disabled the two diverge and the page must
//! still flip.

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

use crate::config::ThemeConfig;
use crate::dom::{ThemeRoot, ToggleControl};
use crate::error::ThemeError;
use crate::storage::{PreferenceStore, load_preference, save_preference};
use crate::theme::ThemePreference;

/// Binds a preference store to the page's root container and toggle control.
pub struct ThemeToggle<S, R, C> {
    config: ThemeConfig,
    store: S,
    root: R,
    control: C,
}

impl<S, R, C> ThemeToggle<S, R, C>
where
    S: PreferenceStore,
    R: ThemeRoot,
    C: ToggleControl,
{
    pub fn new(config: ThemeConfig, store: S, root: R, control: C) -> Self {
        Self {
            config,
            store,
            root,
            control,
        }
    }

    /// Build the toggle and apply the stored preference, provided the page
    /// has a control to bind.
    ///
    /// # Errors
    ///
    /// [`ThemeError::MissingToggle`] when `control` is `None`. The root
    /// container and the store are left untouched in that case.
    pub fn attach(
        config: ThemeConfig,
        store: S,
        root: R,
        control: Option<C>,
    ) -> Result<Self, ThemeError> {
        let Some(control) = control else {
            return Err(ThemeError::MissingToggle {
                id: config.toggle_id,
            });
        };
        let toggle = Self::new(config, store, root, control);
        toggle.initialize();
        Ok(toggle)
    }

    /// Apply the stored preference to the page.
    ///
    /// Sets the marker class and glyph to match what is stored, so calling it
    /// again with unchanged storage leaves the page as it was.
    pub fn initialize(&self) -> ThemePreference {
        let preference = load_preference(&self.store, &self.config.storage_key);
        self.apply(preference);
        preference
    }

    /// Flip the applied theme, persist it, and update the glyph.
    pub fn on_toggle_activated(&mut self) -> ThemePreference {
        let next = self.current().toggled();
        self.apply(next);
        save_preference(&mut self.store, &self.config.storage_key, next);
        log::debug!("theme toggled to {next}");
        next
    }

    /// Theme currently applied to the root container.
    pub fn current(&self) -> ThemePreference {
        ThemePreference::from_dark(self.root.has_class(&self.config.marker_class))
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    fn apply(&self, preference: ThemePreference) {
        self.root.set_class(&self.config.marker_class, preference.is_dark());
        self.control.set_glyph(self.config.glyph_for(preference));
    }
}
