//! Run with `wasm-pack test --headless --firefox --features browser`.
//!
//! Tests share one page, so each one uses its own toggle id, storage key,
//! and marker class.

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, Storage};

use super::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn body() -> HtmlElement {
    document().body().unwrap()
}

fn storage() -> Storage {
    web_sys::window().unwrap().local_storage().unwrap().unwrap()
}

fn config_for(name: &str) -> ThemeConfig {
    ThemeConfig {
        storage_key: format!("{name}Mode"),
        toggle_id: format!("{name}Toggle"),
        marker_class: format!("{name}-dark"),
        ..ThemeConfig::default()
    }
}

fn add_button(id: &str) -> HtmlElement {
    let button = document()
        .create_element("button")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    button.set_id(id);
    body().append_child(&button).unwrap();
    button
}

// =============================================================
// Setup failures
// =============================================================

#[wasm_bindgen_test]
fn missing_control_is_fatal_and_leaves_body_alone() {
    let config = config_for("missing");
    storage().set_item(&config.storage_key, "enabled").unwrap();
    let before = body().class_name();

    let result = mount_with(config.clone());

    assert!(
        matches!(&result, Err(ThemeError::MissingToggle { id }) if id == "missingToggle"),
        "unexpected result: {result:?}"
    );
    assert_eq!(body().class_name(), before);
    assert!(!body().class_list().contains(&config.marker_class));
    assert_eq!(
        storage().get_item(&config.storage_key).unwrap().as_deref(),
        Some("enabled")
    );
    storage().remove_item(&config.storage_key).unwrap();
}

// =============================================================
// Mounted toggle
// =============================================================

#[wasm_bindgen_test]
fn click_flips_body_class_and_storage() {
    let config = config_for("click");
    storage().remove_item(&config.storage_key).unwrap();
    let button = add_button(&config.toggle_id);

    mount_with(config.clone()).unwrap();
    assert!(!body().class_list().contains(&config.marker_class));
    assert!(button.inner_html().contains("bi-moon-stars"));

    button.click();
    assert!(body().class_list().contains(&config.marker_class));
    assert_eq!(
        storage().get_item(&config.storage_key).unwrap().as_deref(),
        Some("enabled")
    );
    assert!(button.inner_html().contains("bi-sun"));

    button.click();
    assert!(!body().class_list().contains(&config.marker_class));
    assert_eq!(storage().get_item(&config.storage_key).unwrap(), None);
    assert!(button.inner_html().contains("bi-moon-stars"));

    button.remove();
}

#[wasm_bindgen_test]
fn stored_preference_applies_dark_on_mount() {
    let config = config_for("stored");
    storage().set_item(&config.storage_key, "enabled").unwrap();
    let button = add_button(&config.toggle_id);

    mount_with(config.clone()).unwrap();
    assert!(body().class_list().contains(&config.marker_class));
    assert!(button.inner_html().contains("bi-sun"));

    body().class_list().remove_1(&config.marker_class).unwrap();
    storage().remove_item(&config.storage_key).unwrap();
    button.remove();
}

#[wasm_bindgen_test]
fn deferred_mount_waits_for_content_loaded() {
    let config = config_for("deferred");
    storage().remove_item(&config.storage_key).unwrap();
    let button = add_button(&config.toggle_id);

    mount_on_content_loaded(&document(), config).unwrap();
    assert_eq!(button.inner_html(), "");

    let event = web_sys::Event::new("DOMContentLoaded").unwrap();
    document().dispatch_event(&event).unwrap();
    assert!(button.inner_html().contains("bi-moon-stars"));

    button.remove();
}
