//! Bootstrap tooltip/popover initialization.
//!
//! Elements opt in through `data-bs-toggle`; Bootstrap owns everything after
//! construction. Running the initializer twice attaches a second instance.
//! A constructor that throws (e.g. tooltips without Popper) is logged and the
//! remaining elements are still attached.

#[cfg(test)]
#[path = "widgets_test.rs"]
mod widgets_test;

use std::fmt::Display;

use crate::config::UiConfig;

/// Bootstrap widgets attached on page ready.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetKind {
    Tooltip,
    Popover,
}

impl WidgetKind {
    pub const ALL: [Self; 2] = [Self::Tooltip, Self::Popover];

    /// Bootstrap constructor name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Tooltip => "Tooltip",
            Self::Popover => "Popover",
        }
    }

    #[must_use]
    pub fn selector(self, config: &UiConfig) -> &str {
        match self {
            Self::Tooltip => &config.tooltip_selector,
            Self::Popover => &config.popover_selector,
        }
    }
}

/// Run `attach` on every element, logging failures at warn.
///
/// Returns how many elements were attached.
pub fn attach_each<T, E: Display>(
    kind: WidgetKind,
    elements: &[T],
    mut attach: impl FnMut(&T) -> Result<(), E>,
) -> usize {
    let mut attached = 0;
    for (index, element) in elements.iter().enumerate() {
        match attach(element) {
            Ok(()) => attached += 1,
            Err(err) => log::warn!("{} #{index} not attached: {err}", kind.name()),
        }
    }
    attached
}

#[cfg(feature = "hydrate")]
pub use browser::init_widgets;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element};

    use super::{WidgetKind, attach_each};
    use crate::config::UiConfig;
    use crate::dom::{WebElement, select_all};
    use crate::error::{UiError, describe_js};

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = bootstrap)]
        type Tooltip;

        #[wasm_bindgen(constructor, catch, js_namespace = bootstrap)]
        fn new(element: &Element) -> Result<Tooltip, JsValue>;
    }

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = bootstrap)]
        type Popover;

        #[wasm_bindgen(constructor, catch, js_namespace = bootstrap)]
        fn new(element: &Element) -> Result<Popover, JsValue>;
    }

    /// Attach Bootstrap widgets to every opted-in element.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Unsupported`] when the Bootstrap bundle is not
    /// loaded, or [`UiError::Js`] for an invalid selector. Per-element
    /// constructor failures are only logged.
    pub fn init_widgets(document: &Document, config: &UiConfig) -> Result<usize, UiError> {
        let window = web_sys::window().ok_or(UiError::NoWindow)?;
        if !js_sys::Reflect::has(&window, &JsValue::from_str("bootstrap")).unwrap_or(false) {
            return Err(UiError::Unsupported("bootstrap"));
        }

        let mut attached = 0;
        for kind in WidgetKind::ALL {
            let elements = select_all(document, kind.selector(config))?;
            let count = attach_each(kind, &elements, |element| construct(kind, element));
            log::debug!("attached {count}/{} {} widgets", elements.len(), kind.name());
            attached += count;
        }
        Ok(attached)
    }

    fn construct(kind: WidgetKind, element: &WebElement) -> Result<(), String> {
        let result = match kind {
            WidgetKind::Tooltip => Tooltip::new(element.element()).map(drop),
            WidgetKind::Popover => Popover::new(element.element()).map(drop),
        };
        result.map_err(|err| describe_js(&err))
    }
}
