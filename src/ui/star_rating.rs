//! Star-rating input hover preview.
//!
//! The markup lists stars highest value first (typically a right-to-left
//! radio group styled left-to-right), so the label at index `i` of `n`
//! stands for `n - i` stars. Hovering a label lights it and every label after
//! it; leaving reverts to the checked input, or to nothing. Selecting a value
//! is left to the inputs' native checked state.

#[cfg(test)]
#[path = "star_rating_test.rs"]
mod star_rating_test;

use crate::dom::UiElement;

/// Snapshot of one rating widget's labels and inputs.
pub struct StarRating<E> {
    labels: Vec<E>,
    inputs: Vec<E>,
    active_class: String,
}

impl<E: UiElement> StarRating<E> {
    pub fn new(labels: Vec<E>, inputs: Vec<E>, active_class: impl Into<String>) -> Self {
        Self { labels, inputs, active_class: active_class.into() }
    }

    /// Number of stars in the widget.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Star value represented by the label at `index`.
    #[must_use]
    pub fn star_value(&self, index: usize) -> usize {
        self.len().saturating_sub(index)
    }

    /// Preview the value of the label at `index`.
    pub fn hover(&self, index: usize) {
        self.light(self.star_value(index));
    }

    /// Show the checked value again.
    pub fn revert(&self) {
        self.light(self.checked_value());
    }

    /// Value of the checked input, or `0` when nothing is checked.
    ///
    /// Uses the input's `value` attribute when it is a whole number, and its
    /// position otherwise.
    #[must_use]
    pub fn checked_value(&self) -> usize {
        let count = self.inputs.len();
        self.inputs
            .iter()
            .position(|input| input.is_checked())
            .map_or(0, |index| {
                self.inputs[index]
                    .value()
                    .and_then(|raw| parse_star_value(&raw))
                    .unwrap_or(count - index)
            })
    }

    /// Light every label worth at most `rating` stars; clamp to the widget size.
    pub fn light(&self, rating: usize) {
        let rating = rating.min(self.len());
        for (index, label) in self.labels.iter().enumerate() {
            label.set_class(&self.active_class, self.star_value(index) <= rating);
        }
    }
}

fn parse_star_value(raw: &str) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{init_all_star_ratings, init_star_rating};

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, Element, Event};

    use super::StarRating;
    use crate::config::UiConfig;
    use crate::dom::{WebElement, select_all, select_all_in};
    use crate::error::UiError;

    /// Attach hover preview listeners to the stars inside `container`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError`] if the queries or listener registration fail.
    pub fn init_star_rating(container: &Element, config: &UiConfig) -> Result<(), UiError> {
        let labels = select_all_in(container, &config.star_label_selector)?;
        let inputs = select_all_in(container, &config.star_input_selector)?;
        let widget = Rc::new(StarRating::new(labels.clone(), inputs, config.star_active_class.clone()));

        for (index, label) in labels.iter().enumerate() {
            let hovered = Rc::clone(&widget);
            let on_over = Closure::<dyn FnMut(Event)>::new(move |_: Event| hovered.hover(index));
            listen(label, "mouseover", on_over)?;

            let left = Rc::clone(&widget);
            let on_out = Closure::<dyn FnMut(Event)>::new(move |_: Event| left.revert());
            listen(label, "mouseout", on_out)?;
        }
        Ok(())
    }

    /// Initialize every rating widget on the page.
    ///
    /// # Errors
    ///
    /// Returns [`UiError`] if the container query fails.
    pub fn init_all_star_ratings(document: &Document, config: &UiConfig) -> Result<usize, UiError> {
        let containers = select_all(document, &config.star_container_selector)?;
        for container in &containers {
            if let Err(err) = init_star_rating(container.element(), config) {
                log::warn!("star rating init failed: {err}");
            }
        }
        Ok(containers.len())
    }

    fn listen(target: &WebElement, event: &str, handler: Closure<dyn FnMut(Event)>) -> Result<(), UiError> {
        target
            .element()
            .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())?;
        handler.forget();
        Ok(())
    }
}
