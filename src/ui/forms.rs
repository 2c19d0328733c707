//! Required-field validation used as a submit guard.
//!
//! Every required field is re-marked on every pass, valid ones included.
//! Failures are reported only through the invalid class; focus is not moved.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::dom::UiElement;

/// Mark blank fields with `invalid_class` and clear it from filled ones.
///
/// A field is blank when its trimmed value is empty. Returns `true` only if
/// no field is blank.
pub fn validate_fields<E: UiElement>(fields: &[E], invalid_class: &str) -> bool {
    let mut valid = true;
    for field in fields {
        let filled = field.value().is_some_and(|v| !v.trim().is_empty());
        field.set_class(invalid_class, !filled);
        valid &= filled;
    }
    valid
}

#[cfg(feature = "hydrate")]
pub use browser::{install_submit_guards, validate_form};

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, Element, Event};

    use super::validate_fields;
    use crate::config::UiConfig;
    use crate::dom::select_all_in;
    use crate::error::UiError;

    /// Validate the required descendants of `form`.
    pub fn validate_form(form: &Element, config: &UiConfig) -> bool {
        match select_all_in(form, &config.required_field_selector) {
            Ok(fields) => validate_fields(&fields, &config.invalid_class),
            Err(err) => {
                log::warn!("required-field lookup failed: {err}");
                true
            }
        }
    }

    /// Cancel submission of every matching form while a required field is blank.
    ///
    /// # Errors
    ///
    /// Returns [`UiError`] if the form query or listener registration fails.
    pub fn install_submit_guards(document: &Document, config: &UiConfig) -> Result<usize, UiError> {
        let forms = crate::dom::select_all(document, &config.validated_form_selector)?;
        for form in &forms {
            let target = form.element().clone();
            let config = config.clone();
            let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                if !validate_form(&target, &config) {
                    event.prevent_default();
                }
            });
            form.element()
                .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
            // Listeners live as long as the page.
            on_submit.forget();
        }
        Ok(forms.len())
    }
}
