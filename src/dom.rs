//! Handles for the two page elements the toggle touches.
//!
//! The root container carries the marker class; the control shows the glyph.
//! Both are passed into [`ThemeToggle`](crate::toggle::ThemeToggle) at
//! construction rather than looked up from globals, so the toggle logic runs
//! against fakes on the host. Methods take `&self` because DOM nodes are
//! shared, interior-mutable handles.

/// Container whose class list selects the dark stylesheet rules.
pub trait ThemeRoot {
    /// Whether `class` is currently in the container's class list.
    fn has_class(&self, class: &str) -> bool;
    /// Add `class` when `present`, remove it otherwise. Idempotent.
    fn set_class(&self, class: &str, present: bool);
}

impl<R: ThemeRoot + ?Sized> ThemeRoot for &R {
    fn has_class(&self, class: &str) -> bool {
        (**self).has_class(class)
    }

    fn set_class(&self, class: &str, present: bool) {
        (**self).set_class(class, present);
    }
}

/// Interactive control that flips the theme.
pub trait ToggleControl {
    /// Replace the control's content with `markup`.
    fn set_glyph(&self, markup: &str);
}

impl<C: ToggleControl + ?Sized> ToggleControl for &C {
    fn set_glyph(&self, markup: &str) {
        (**self).set_glyph(markup);
    }
}

/// `document.body`.
#[cfg(feature = "browser")]
pub struct BodyElement(web_sys::HtmlElement);

#[cfg(feature = "browser")]
impl BodyElement {
    pub fn new(body: web_sys::HtmlElement) -> Self {
        Self(body)
    }
}

#[cfg(feature = "browser")]
impl ThemeRoot for BodyElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn set_class(&self, class: &str, present: bool) {
        let list = self.0.class_list();
        let result = if present {
            list.add_1(class)
        } else {
            list.remove_1(class)
        };
        if let Err(err) = result {
            log::warn!("failed to update body class {class}: {err:?}");
        }
    }
}

/// The element found under the configured toggle id.
#[cfg(feature = "browser")]
pub struct ToggleButton(web_sys::Element);

#[cfg(feature = "browser")]
impl ToggleButton {
    pub fn new(element: web_sys::Element) -> Self {
        Self(element)
    }

    /// Event target for the click listener.
    pub fn element(&self) -> &web_sys::Element {
        &self.0
    }
}

#[cfg(feature = "browser")]
impl ToggleControl for ToggleButton {
    fn set_glyph(&self, markup: &str) {
        self.0.set_inner_html(markup);
    }
}
