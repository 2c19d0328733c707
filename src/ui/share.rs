//! Clipboard copy with a confirmation toast, and venue sharing.
//!
//! ERROR HANDLING
//! ==============
//! A failed clipboard write or a cancelled share sheet is not shown to the
//! user; it is only logged. The toast appears on success only.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use futures::future::LocalBoxFuture;

use crate::error::UiError;
use crate::util::timer::Scheduler;

/// How long the copy confirmation stays on screen.
pub const TOAST_DURATION_MS: u32 = 2000;
pub const TOAST_MESSAGE: &str = "Copied to clipboard!";

/// System clipboard.
pub trait Clipboard {
    fn write_text<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), UiError>>;
}

/// Native share sheet.
pub trait ShareSheet {
    /// Whether the platform offers a share sheet at all.
    fn is_available(&self) -> bool;

    fn share<'a>(&'a self, title: &'a str, url: &'a str) -> LocalBoxFuture<'a, Result<(), UiError>>;
}

/// Where transient notifications are shown.
pub trait ToastHost {
    type Toast: DismissToast + 'static;

    /// Put a toast with `message` on screen.
    ///
    /// # Errors
    ///
    /// Returns [`UiError`] when the toast cannot be attached.
    fn show_toast(&self, message: &str) -> Result<Self::Toast, UiError>;
}

pub trait DismissToast {
    fn dismiss(self);
}

/// Show a toast and remove it after [`TOAST_DURATION_MS`].
///
/// # Errors
///
/// Returns [`UiError`] when the toast cannot be shown.
pub fn flash_toast<H, S>(host: &H, scheduler: &S, message: &str) -> Result<(), UiError>
where
    H: ToastHost + ?Sized,
    S: Scheduler + ?Sized,
{
    let toast = host.show_toast(message)?;
    let handle = scheduler.schedule(TOAST_DURATION_MS, Box::new(move || toast.dismiss()));
    scheduler.detach(handle);
    Ok(())
}

/// Everything the copy/share flows touch.
pub struct ShareContext<'a, C: ?Sized, H: ?Sized, S: ?Sized> {
    pub clipboard: &'a C,
    pub toasts: &'a H,
    pub scheduler: &'a S,
}

impl<C, H, S> ShareContext<'_, C, H, S>
where
    C: Clipboard + ?Sized,
    H: ToastHost + ?Sized,
    S: Scheduler + ?Sized,
{
    /// Copy `text`; confirm with a toast only if the write succeeds.
    pub async fn copy_to_clipboard(&self, text: &str) {
        if let Err(err) = self.clipboard.write_text(text).await {
            log::debug!("clipboard write failed: {err}");
            return;
        }
        if let Err(err) = flash_toast(self.toasts, self.scheduler, TOAST_MESSAGE) {
            log::warn!("copy toast failed: {err}");
        }
    }

    /// Share via the native sheet when present, else copy `url`.
    pub async fn share_venue<Sh>(&self, sheet: &Sh, name: &str, url: &str)
    where
        Sh: ShareSheet + ?Sized,
    {
        if sheet.is_available() {
            if let Err(err) = sheet.share(name, url).await {
                log::debug!("share sheet dismissed: {err}");
            }
        } else {
            self.copy_to_clipboard(url).await;
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{BodyToasts, NavigatorClipboard, NavigatorShare, copy_to_clipboard, share_venue};

#[cfg(feature = "hydrate")]
mod browser {
    use futures::future::LocalBoxFuture;
    use js_sys::{Object, Promise, Reflect};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Document, Element};

    use super::{Clipboard, DismissToast, ShareContext, ShareSheet, ToastHost};
    use crate::config::UiConfig;
    use crate::error::UiError;
    use crate::util::timer::BrowserScheduler;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
        fn clipboard_write_text(text: &str) -> Result<Promise, JsValue>;

        #[wasm_bindgen(js_namespace = navigator, js_name = share, catch)]
        fn navigator_share(data: &JsValue) -> Result<Promise, JsValue>;
    }

    /// `navigator.clipboard`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct NavigatorClipboard;

    impl Clipboard for NavigatorClipboard {
        fn write_text<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), UiError>> {
            Box::pin(async move {
                JsFuture::from(clipboard_write_text(text)?).await?;
                Ok(())
            })
        }
    }

    /// `navigator.share`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct NavigatorShare;

    impl ShareSheet for NavigatorShare {
        fn is_available(&self) -> bool {
            web_sys::window().is_some_and(|window| {
                Reflect::has(&window.navigator(), &JsValue::from_str("share")).unwrap_or(false)
            })
        }

        fn share<'a>(&'a self, title: &'a str, url: &'a str) -> LocalBoxFuture<'a, Result<(), UiError>> {
            Box::pin(async move {
                let data = Object::new();
                Reflect::set(&data, &JsValue::from_str("title"), &JsValue::from_str(title))?;
                Reflect::set(&data, &JsValue::from_str("url"), &JsValue::from_str(url))?;
                JsFuture::from(navigator_share(&data)?).await?;
                Ok(())
            })
        }
    }

    /// Toasts appended to `<body>`.
    pub struct BodyToasts {
        document: Document,
        class: String,
    }

    impl BodyToasts {
        #[must_use]
        pub fn new(document: Document, class: impl Into<String>) -> Self {
            Self { document, class: class.into() }
        }
    }

    impl ToastHost for BodyToasts {
        type Toast = Element;

        fn show_toast(&self, message: &str) -> Result<Element, UiError> {
            let body = self.document.body().ok_or(UiError::NoBody)?;
            let toast = self.document.create_element("div")?;
            toast.set_class_name(&self.class);
            toast.set_attribute("role", "status")?;
            toast.set_text_content(Some(message));
            body.append_child(&toast)?;
            Ok(toast)
        }
    }

    impl DismissToast for Element {
        fn dismiss(self) {
            self.remove();
        }
    }

    /// Copy `text` and flash a confirmation toast.
    pub fn copy_to_clipboard(text: String, config: &UiConfig) {
        let class = config.toast_class.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let document = match crate::dom::document() {
                Ok(document) => document,
                Err(err) => {
                    log::warn!("clipboard unavailable: {err}");
                    return;
                }
            };
            let toasts = BodyToasts::new(document, class);
            let context = ShareContext { clipboard: &NavigatorClipboard, toasts: &toasts, scheduler: &BrowserScheduler };
            context.copy_to_clipboard(&text).await;
        });
    }

    /// Open the native share sheet for a venue, or copy its link.
    pub fn share_venue(name: String, url: String, config: &UiConfig) {
        let class = config.toast_class.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let document = match crate::dom::document() {
                Ok(document) => document,
                Err(err) => {
                    log::warn!("clipboard unavailable: {err}");
                    return;
                }
            };
            let toasts = BodyToasts::new(document, class);
            let context = ShareContext { clipboard: &NavigatorClipboard, toasts: &toasts, scheduler: &BrowserScheduler };
            context.share_venue(&NavigatorShare, &name, &url).await;
        });
    }
}
