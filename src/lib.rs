//! # theme-toggle
//!
//! Dark/light theme switch for server-rendered pages, compiled to WASM.
//!
//! On load the stored preference is applied as a `dark-mode` class on
//! `<body>`; each click on `#darkModeToggle` flips the class, swaps the
//! button glyph, and writes the choice to `localStorage` under `darkMode`.
//!
//! The toggle logic is generic over [`storage::PreferenceStore`],
//! [`dom::ThemeRoot`], and [`dom::ToggleControl`] so it tests on the host.
//! The `browser` feature adds the `web-sys` bindings and the
//! `#[wasm_bindgen(start)]` entry point.

pub mod config;
pub mod dom;
pub mod error;
pub mod storage;
pub mod theme;
pub mod toggle;

#[cfg(feature = "browser")]
pub mod browser;

pub use config::ThemeConfig;
pub use error::ThemeError;
pub use storage::{MemoryStore, PreferenceStore};
pub use theme::ThemePreference;
pub use toggle::ThemeToggle;
