//! Setup failures for the browser entry point.
//!
//! Only mounting can fail. Once the listener is attached, storage and DOM
//! mutation problems are logged and swallowed.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned when the toggle cannot be mounted on the page.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// No global `window` (not running in a browser main thread).
    #[error("no global window")]
    NoWindow,
    /// `window.document` is missing.
    #[error("window has no document")]
    NoDocument,
    /// `document.body` is missing.
    #[error("document has no body")]
    NoBody,
    /// The toggle control is not in the page markup.
    #[error("toggle control #{id} not found")]
    MissingToggle { id: String },
    /// `addEventListener` rejected the handler.
    #[error("failed to attach listener: {0}")]
    Listener(String),
}
