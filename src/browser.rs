//! WASM entry point: wires [`ThemeToggle`] to the live page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The module may load before or after the document finishes parsing. While
//! `readyState` is `"loading"` mounting waits for `DOMContentLoaded`;
//! otherwise it runs straight away.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::config::ThemeConfig;
use crate::dom::{BodyElement, ToggleButton};
use crate::error::ThemeError;
use crate::storage::LocalStorage;
use crate::toggle::ThemeToggle;

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "browser_test.rs"]
mod browser_test;

/// Module start hook run by the generated JS glue.
///
/// # Errors
///
/// Throws when the page cannot host the toggle (for example the control is
/// missing from the markup).
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config = ThemeConfig::default();
    if let Err(err) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&format!("console logger already set: {err}").into());
    }
    when_ready(config).map_err(into_js)
}

/// Mount with the default page contract.
///
/// # Errors
///
/// See [`mount_with`].
pub fn mount() -> Result<(), ThemeError> {
    mount_with(ThemeConfig::default())
}

/// Apply the stored theme and attach the click listener to the control.
///
/// # Errors
///
/// Returns an error when the window, document, body, or toggle control is
/// missing, or the listener cannot be attached.
pub fn mount_with(config: ThemeConfig) -> Result<(), ThemeError> {
    let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
    let document = window.document().ok_or(ThemeError::NoDocument)?;
    let body = document.body().ok_or(ThemeError::NoBody)?;
    let control = document
        .get_element_by_id(&config.toggle_id)
        .map(ToggleButton::new);

    let store = LocalStorage::from_window(&window);
    let persistent = store.is_available();
    let mut toggle = ThemeToggle::attach(config, store, BodyElement::new(body), control)?;
    log::info!(
        "theme toggle mounted: {} (persistent: {persistent})",
        toggle.current()
    );

    let target = toggle.control().element().clone();
    let on_click = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        toggle.on_toggle_activated();
    }) as Box<dyn FnMut(web_sys::Event)>);
    target
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|err| ThemeError::Listener(describe(&err)))?;
    // The listener lives as long as the page.
    on_click.forget();
    Ok(())
}

fn when_ready(config: ThemeConfig) -> Result<(), ThemeError> {
    let document = web_sys::window()
        .ok_or(ThemeError::NoWindow)?
        .document()
        .ok_or(ThemeError::NoDocument)?;
    if document.ready_state() == "loading" {
        mount_on_content_loaded(&document, config)
    } else {
        mount_with(config)
    }
}

/// Defer [`mount_with`] to the first `DOMContentLoaded` on `document`.
/// Failures at that point can only be logged.
fn mount_on_content_loaded(
    document: &web_sys::Document,
    config: ThemeConfig,
) -> Result<(), ThemeError> {
    let on_ready = Closure::once_into_js(move || {
        if let Err(err) = mount_with(config) {
            log::error!("theme toggle setup failed: {err}");
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        .map_err(|err| ThemeError::Listener(describe(&err)))
}

fn into_js(err: ThemeError) -> JsValue {
    log::error!("theme toggle setup failed: {err}");
    js_sys::Error::new(&err.to_string()).into()
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
