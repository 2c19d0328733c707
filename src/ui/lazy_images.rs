//! Deferred image loading.
//!
//! Images carry their real source in a marker attribute (`data-src` by
//! default). When one scrolls into view the source is swapped in, the marker
//! removed, and the image unobserved, so each image loads at most once.

#[cfg(test)]
#[path = "lazy_images_test.rs"]
mod lazy_images_test;

use crate::dom::UiElement;

/// Move the deferred source into `src`.
///
/// Returns `false` when the image has no deferred source left (already
/// revealed, or never deferred).
pub fn reveal_image<E: UiElement + ?Sized>(image: &E, src_attribute: &str) -> bool {
    let Some(src) = image.attribute(src_attribute) else {
        return false;
    };
    image.set_attribute("src", &src);
    image.remove_attribute(src_attribute);
    true
}

#[cfg(feature = "hydrate")]
pub use browser::init_lazy_images;

#[cfg(feature = "hydrate")]
mod browser {
    use js_sys::Array;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry};

    use super::reveal_image;
    use crate::config::UiConfig;
    use crate::dom::{WebElement, select_all};
    use crate::error::UiError;

    /// Observe every deferred image in `document`.
    ///
    /// Without `IntersectionObserver` the images are revealed immediately.
    ///
    /// # Errors
    ///
    /// Returns [`UiError`] if the query or observer construction fails.
    pub fn init_lazy_images(document: &Document, config: &UiConfig) -> Result<usize, UiError> {
        let images = select_all(document, &config.lazy_image_selector)?;
        if images.is_empty() {
            return Ok(0);
        }

        if !observer_supported() {
            log::debug!("IntersectionObserver unavailable, revealing {} images eagerly", images.len());
            for image in &images {
                reveal_image(image, &config.lazy_src_attribute);
            }
            return Ok(images.len());
        }

        let attribute = config.lazy_src_attribute.clone();
        let on_intersect =
            Closure::<dyn FnMut(Array, IntersectionObserver)>::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    reveal_image(&WebElement(target.clone()), &attribute);
                    observer.unobserve(&target);
                }
            });
        let observer = IntersectionObserver::new(on_intersect.as_ref().unchecked_ref())?;
        // The observer calls back for the life of the page.
        on_intersect.forget();

        for image in &images {
            observer.observe(image.element());
        }
        Ok(images.len())
    }

    fn observer_supported() -> bool {
        web_sys::window().is_some_and(|window| {
            js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
        })
    }
}
