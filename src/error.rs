//! Error types shared by the browser glue.
//!
//! ERROR HANDLING
//! ==============
//! Browser calls return `Result<_, UiError>` and are logged at the export
//! boundary. Location failures carry their own [`GeoError`] so callers can
//! tell a denied permission from a missing capability, even though the page
//! only ever shows one fixed message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure while touching the browser environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    /// `window` is not available (not running in a browser).
    #[error("browser window is unavailable")]
    NoWindow,
    /// `window.document` is not available.
    #[error("document is unavailable")]
    NoDocument,
    /// `document.body` is not available.
    #[error("document body is unavailable")]
    NoBody,
    /// A required browser capability is missing.
    #[error("browser capability `{0}` is unavailable")]
    Unsupported(&'static str),
    /// A JavaScript call threw or a promise rejected.
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(describe_js(&value))
    }
}

/// Best-effort human-readable form of a thrown JS value.
#[cfg(feature = "hydrate")]
pub(crate) fn describe_js(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}

/// Failure to obtain the device's current position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeoError {
    /// The browser exposes no geolocation capability.
    #[error("geolocation is not supported by this browser")]
    Unsupported,
    /// The user (or a policy) refused the permission prompt.
    #[error("location permission denied")]
    PermissionDenied,
    /// No position could be determined, or the request was abandoned.
    #[error("position unavailable")]
    Unavailable,
    /// The device did not produce a fix in time.
    #[error("location request timed out")]
    Timeout,
    /// Any other failure reported by the browser.
    #[error("location request failed: {0}")]
    Other(String),
}

impl GeoError {
    /// Map a `GeolocationPositionError.code` to a variant.
    #[must_use]
    pub fn from_code(code: u16, message: &str) -> Self {
        match code {
            1 => Self::PermissionDenied,
            2 => Self::Unavailable,
            3 => Self::Timeout,
            _ => Self::Other(message.to_owned()),
        }
    }
}
