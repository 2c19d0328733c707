//! `web-sys` backed [`UiElement`].

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, NodeList};

use super::UiElement;
use crate::error::UiError;

/// A live DOM element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebElement(pub Element);

impl WebElement {
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.0
    }
}

impl From<Element> for WebElement {
    fn from(element: Element) -> Self {
        Self(element)
    }
}

impl UiElement for WebElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn set_class(&self, class: &str, on: bool) {
        let list = self.0.class_list();
        let result = if on { list.add_1(class) } else { list.remove_1(class) };
        if let Err(err) = result {
            log::warn!("class update `{class}` failed: {}", crate::error::describe_js(&err));
        }
    }

    fn toggle_class(&self, class: &str) -> bool {
        match self.0.class_list().toggle(class) {
            Ok(present) => present,
            Err(err) => {
                log::warn!("class toggle `{class}` failed: {}", crate::error::describe_js(&err));
                self.has_class(class)
            }
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(err) = self.0.set_attribute(name, value) {
            log::warn!("setting `{name}` failed: {}", crate::error::describe_js(&err));
        }
    }

    fn remove_attribute(&self, name: &str) {
        if let Err(err) = self.0.remove_attribute(name) {
            log::warn!("removing `{name}` failed: {}", crate::error::describe_js(&err));
        }
    }

    fn value(&self) -> Option<String> {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            return Some(area.value());
        }
        self.0.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
    }

    fn is_checked(&self) -> bool {
        self.0.dyn_ref::<HtmlInputElement>().is_some_and(HtmlInputElement::checked)
    }
}

/// The current page's document.
///
/// # Errors
///
/// Returns [`UiError::NoWindow`] / [`UiError::NoDocument`] outside a page.
pub fn document() -> Result<Document, UiError> {
    web_sys::window()
        .ok_or(UiError::NoWindow)?
        .document()
        .ok_or(UiError::NoDocument)
}

/// All elements in `document` matching `selector`, in document order.
///
/// # Errors
///
/// Returns [`UiError::Js`] when `selector` is invalid.
pub fn select_all(document: &Document, selector: &str) -> Result<Vec<WebElement>, UiError> {
    Ok(collect(&document.query_selector_all(selector)?))
}

/// All descendants of `root` matching `selector`, in document order.
///
/// # Errors
///
/// Returns [`UiError::Js`] when `selector` is invalid.
pub fn select_all_in(root: &Element, selector: &str) -> Result<Vec<WebElement>, UiError> {
    Ok(collect(&root.query_selector_all(selector)?))
}

fn collect(list: &NodeList) -> Vec<WebElement> {
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(element) = list.item(i).and_then(|node| node.dyn_ref::<Element>().cloned()) {
            out.push(WebElement(element));
        }
    }
    out
}
