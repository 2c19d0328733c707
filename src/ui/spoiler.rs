//! Spoiler reveal toggle.

#[cfg(test)]
#[path = "spoiler_test.rs"]
mod spoiler_test;

use crate::dom::UiElement;

/// Flip the reveal class on `element`; returns whether it is now revealed.
pub fn toggle_spoiler<E: UiElement + ?Sized>(element: &E, class: &str) -> bool {
    element.toggle_class(class)
}
