//! DOM adapter.
//!
//! SYSTEM CONTEXT
//! ==============
//! Helpers that decide *what* to change on a page (validation marks, star
//! highlights, deferred image sources) are written against [`UiElement`]
//! rather than `web_sys::Element`, so they run in native tests against a fake
//! node. [`WebElement`] is the browser implementation.
//!
//! DOM handles are shared references; every method takes `&self` and mutates
//! through the handle, the same way the browser API does.

#[cfg(feature = "hydrate")]
mod web;

#[cfg(feature = "hydrate")]
pub use web::{WebElement, document, select_all, select_all_in};

/// The slice of element behavior the page helpers need.
pub trait UiElement {
    /// Whether the element's class list contains `class`.
    fn has_class(&self, class: &str) -> bool;

    /// Add `class` when `on`, remove it otherwise.
    fn set_class(&self, class: &str, on: bool);

    /// Flip `class`; returns whether it is now present.
    fn toggle_class(&self, class: &str) -> bool {
        let next = !self.has_class(class);
        self.set_class(class, next);
        next
    }

    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&self, name: &str, value: &str);

    fn remove_attribute(&self, name: &str);

    /// Current value of a form control; `None` for non-controls.
    fn value(&self) -> Option<String>;

    /// Checked state of a checkbox/radio input; `false` for anything else.
    fn is_checked(&self) -> bool;
}
