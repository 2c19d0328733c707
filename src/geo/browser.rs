//! `navigator.geolocation` source and the real page actions.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Geolocation, GeolocationPosition, GeolocationPositionError};

use super::{Completion, Coordinates, PositionSource, SearchPage, search_near};
use crate::error::{GeoError, describe_js};

/// Positions from the browser's Geolocation API. No timeout is configured;
/// the lookup waits for the permission prompt and the device fix.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserGeolocation;

impl PositionSource for BrowserGeolocation {
    fn request_position(&self, done: Completion) {
        let Some(geolocation) = browser_geolocation() else {
            done.resolve(Err(GeoError::Unsupported));
            return;
        };

        // Success and error callbacks race for the single completion.
        let slot = Rc::new(RefCell::new(Some(done)));

        let on_success = {
            let slot = Rc::clone(&slot);
            Closure::once_into_js(move |position: JsValue| {
                let coords = position.unchecked_into::<GeolocationPosition>().coords();
                let done = slot.borrow_mut().take();
                if let Some(done) = done {
                    done.resolve(Ok(Coordinates { lat: coords.latitude(), lng: coords.longitude() }));
                }
            })
        };
        let on_error = {
            let slot = Rc::clone(&slot);
            Closure::once_into_js(move |error: JsValue| {
                let error = error.unchecked_into::<GeolocationPositionError>();
                let done = slot.borrow_mut().take();
                if let Some(done) = done {
                    done.resolve(Err(GeoError::from_code(error.code(), &error.message())));
                }
            })
        };

        if let Err(err) =
            geolocation.get_current_position_with_error_callback(on_success.unchecked_ref(), Some(on_error.unchecked_ref()))
        {
            let done = slot.borrow_mut().take();
            if let Some(done) = done {
                done.resolve(Err(GeoError::Other(describe_js(&err))));
            }
        }
    }
}

fn browser_geolocation() -> Option<Geolocation> {
    let navigator = web_sys::window()?.navigator();
    match js_sys::Reflect::get(&navigator, &JsValue::from_str("geolocation")) {
        Ok(value) if !value.is_undefined() && !value.is_null() => Some(value.unchecked_into()),
        _ => None,
    }
}

/// `window.location` / `window.alert`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPage;

impl SearchPage for BrowserPage {
    fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(url) {
            log::error!("navigation to {url} failed: {}", describe_js(&err));
        }
    }

    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            log::error!("alert failed: {}", describe_js(&err));
        }
    }
}

/// Find venues around the device: redirect on success, alert on failure.
pub fn search_near_me() {
    wasm_bindgen_futures::spawn_local(async {
        search_near(&BrowserGeolocation, &BrowserPage).await;
    });
}
