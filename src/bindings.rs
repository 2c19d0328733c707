//! JavaScript surface: the start hook and the functions inline handlers call.
//!
//! Names are camelCase so templates keep calling e.g.
//! `onclick="shareVenue('The Vault', location.href)"`. Failures are logged to
//! the console here rather than thrown back into markup.

use std::cell::OnceCell;

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::UiConfig;
use crate::dom::{WebElement, document};
use crate::error::{UiError, describe_js};
use crate::geo::{BrowserGeolocation, Coordinates};
use crate::ui::{forms, lazy_images, share, spoiler, star_rating, widgets};
use crate::util::debounce::Debounced;
use crate::util::format;
use crate::util::timer::BrowserScheduler;

#[wasm_bindgen(inline_js = "export function forwardCall(f) { return function (...args) { return f(this, args); }; }")]
extern "C" {
    /// Wrap `f(this, args)` as a plain variadic JS function.
    #[wasm_bindgen(js_name = forwardCall)]
    fn forward_call(target: &Function) -> Function;
}

thread_local! {
    static CONFIG: OnceCell<UiConfig> = const { OnceCell::new() };
}

fn with_config<R>(f: impl FnOnce(&UiConfig) -> R) -> R {
    CONFIG.with(|cell| f(cell.get_or_init(UiConfig::load)))
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger already set: {err}")));
    }

    if let Err(err) = on_page_ready(init_page) {
        log::error!("page init not scheduled: {err}");
    }
    if let Err(err) = on_page_ready(init_images) {
        log::error!("lazy images not scheduled: {err}");
    }
}

/// Run `f` once the document has been parsed.
fn on_page_ready(f: fn()) -> Result<(), UiError> {
    let doc = document()?;
    if doc.ready_state() == "loading" {
        let listener = Closure::once_into_js(f);
        doc.add_event_listener_with_callback("DOMContentLoaded", listener.unchecked_ref())?;
    } else {
        f();
    }
    Ok(())
}

fn init_page() {
    with_config(|config| {
        let doc = match document() {
            Ok(doc) => doc,
            Err(err) => {
                log::error!("page init skipped: {err}");
                return;
            }
        };
        if let Err(err) = widgets::init_widgets(&doc, config) {
            log::warn!("widgets not initialized: {err}");
        }
        match forms::install_submit_guards(&doc, config) {
            Ok(count) => log::debug!("guarding {count} forms"),
            Err(err) => log::warn!("form guards not installed: {err}"),
        }
        match star_rating::init_all_star_ratings(&doc, config) {
            Ok(count) => log::debug!("initialized {count} star ratings"),
            Err(err) => log::warn!("star ratings not initialized: {err}"),
        }
    });
}

fn init_images() {
    with_config(|config| {
        let result = document().and_then(|doc| lazy_images::init_lazy_images(&doc, config));
        match result {
            Ok(count) => log::debug!("deferring {count} images"),
            Err(err) => log::warn!("lazy images not initialized: {err}"),
        }
    });
}

#[wasm_bindgen(js_name = getCurrentLocation)]
pub fn get_current_location(callback: Function) {
    crate::geo::get_current_location(&BrowserGeolocation, move |result| {
        let outcome = match result {
            Ok(coords) => coords_to_js(coords)
                .and_then(|coords| callback.call2(&JsValue::NULL, &JsValue::NULL, &coords)),
            Err(err) => {
                let error = js_sys::Error::new(&err.to_string());
                callback.call2(&JsValue::NULL, &error, &JsValue::NULL)
            }
        };
        if let Err(err) = outcome {
            log::warn!("location callback threw: {}", describe_js(&err));
        }
    });
}

fn coords_to_js(coords: Coordinates) -> Result<JsValue, JsValue> {
    let object = Object::new();
    Reflect::set(&object, &JsValue::from_str("lat"), &JsValue::from_f64(coords.lat))?;
    Reflect::set(&object, &JsValue::from_str("lng"), &JsValue::from_f64(coords.lng))?;
    Ok(object.into())
}

#[wasm_bindgen(js_name = searchNearMe)]
pub fn search_near_me() {
    crate::geo::search_near_me();
}

#[wasm_bindgen(js_name = formatDistance)]
pub fn format_distance(km: f64) -> String {
    format::format_distance(km)
}

#[wasm_bindgen(js_name = formatRating)]
pub fn format_rating(rating: Option<f64>) -> String {
    format::format_rating(rating)
}

/// Trailing-edge debounce of `func`. The last call in a burst runs with its
/// own `this` and full argument list.
#[wasm_bindgen(js_name = debounce)]
pub fn debounce(func: Function, wait: u32) -> Function {
    let debounced = Debounced::new(
        move |(this, args): (JsValue, Array)| {
            if let Err(err) = func.apply(&this, &args) {
                log::warn!("debounced function threw: {}", describe_js(&err));
            }
        },
        wait,
        BrowserScheduler,
    );
    let receiver: Function =
        Closure::<dyn Fn(JsValue, Array)>::new(move |this: JsValue, args: Array| debounced.call((this, args)))
            .into_js_value()
            .unchecked_into();
    forward_call(&receiver)
}

#[wasm_bindgen(js_name = toggleSpoiler)]
pub fn toggle_spoiler(element: Element) {
    with_config(|config| {
        spoiler::toggle_spoiler(&WebElement(element), &config.spoiler_class);
    });
}

#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: String) {
    with_config(|config| share::copy_to_clipboard(text, config));
}

#[wasm_bindgen(js_name = shareVenue)]
pub fn share_venue(name: String, url: String) {
    with_config(|config| share::share_venue(name, url, config));
}

#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(form: Element) -> bool {
    with_config(|config| forms::validate_form(&form, config))
}

/// Attach hover listeners to one rating widget.
///
/// Every `.star-rating` is already initialized on page ready; calling this
/// again for the same container adds a second set of listeners.
#[wasm_bindgen(js_name = initStarRating)]
pub fn init_star_rating(container: Element) {
    with_config(|config| {
        if let Err(err) = star_rating::init_star_rating(&container, config) {
            log::warn!("star rating init failed: {err}");
        }
    });
}
