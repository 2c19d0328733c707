use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;
use futures::future;

use super::*;
use crate::test_support::ManualScheduler;

struct FakeClipboard {
    fail: bool,
    written: RefCell<Vec<String>>,
}

impl FakeClipboard {
    fn working() -> Self {
        Self { fail: false, written: RefCell::new(Vec::new()) }
    }

    fn broken() -> Self {
        Self { fail: true, written: RefCell::new(Vec::new()) }
    }
}

impl Clipboard for FakeClipboard {
    fn write_text<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), UiError>> {
        if self.fail {
            return Box::pin(future::ready(Err(UiError::Js("NotAllowedError".to_owned()))));
        }
        self.written.borrow_mut().push(text.to_owned());
        Box::pin(future::ready(Ok(())))
    }
}

struct FakeSheet {
    available: bool,
    cancel: bool,
    shared: RefCell<Vec<(String, String)>>,
}

impl FakeSheet {
    fn new(available: bool, cancel: bool) -> Self {
        Self { available, cancel, shared: RefCell::new(Vec::new()) }
    }
}

impl ShareSheet for FakeSheet {
    fn is_available(&self) -> bool {
        self.available
    }

    fn share<'a>(&'a self, title: &'a str, url: &'a str) -> LocalBoxFuture<'a, Result<(), UiError>> {
        self.shared.borrow_mut().push((title.to_owned(), url.to_owned()));
        if self.cancel {
            return Box::pin(future::ready(Err(UiError::Js("AbortError".to_owned()))));
        }
        Box::pin(future::ready(Ok(())))
    }
}

/// Toasts live in a shared list until dismissed.
#[derive(Clone, Default)]
struct FakeBody {
    toasts: Rc<RefCell<Vec<String>>>,
}

struct FakeToast {
    body: Rc<RefCell<Vec<String>>>,
    message: String,
}

impl DismissToast for FakeToast {
    fn dismiss(self) {
        self.body.borrow_mut().retain(|m| *m != self.message);
    }
}

impl ToastHost for FakeBody {
    type Toast = FakeToast;

    fn show_toast(&self, message: &str) -> Result<FakeToast, UiError> {
        self.toasts.borrow_mut().push(message.to_owned());
        Ok(FakeToast { body: Rc::clone(&self.toasts), message: message.to_owned() })
    }
}

// =============================================================
// flash_toast
// =============================================================

#[test]
fn toast_is_removed_after_exactly_two_seconds() {
    let body = FakeBody::default();
    let clock = ManualScheduler::new();

    flash_toast(&body, &clock, "hello").expect("toast should show");
    assert_eq!(*body.toasts.borrow(), vec!["hello".to_owned()]);

    clock.advance(u64::from(TOAST_DURATION_MS) - 1);
    assert_eq!(body.toasts.borrow().len(), 1);

    clock.advance(1);
    assert!(body.toasts.borrow().is_empty());
    assert_eq!(clock.pending(), 0);
}

// =============================================================
// copy_to_clipboard
// =============================================================

#[test]
fn successful_copy_flashes_confirmation() {
    let clipboard = FakeClipboard::working();
    let body = FakeBody::default();
    let clock = ManualScheduler::new();
    let context = ShareContext { clipboard: &clipboard, toasts: &body, scheduler: &clock };

    block_on(context.copy_to_clipboard("https://rooms.example/venue/7"));

    assert_eq!(*clipboard.written.borrow(), vec!["https://rooms.example/venue/7".to_owned()]);
    assert_eq!(*body.toasts.borrow(), vec![TOAST_MESSAGE.to_owned()]);

    clock.advance(u64::from(TOAST_DURATION_MS));
    assert!(body.toasts.borrow().is_empty());
}

#[test]
fn failed_copy_shows_nothing() {
    let clipboard = FakeClipboard::broken();
    let body = FakeBody::default();
    let clock = ManualScheduler::new();
    let context = ShareContext { clipboard: &clipboard, toasts: &body, scheduler: &clock };

    block_on(context.copy_to_clipboard("text"));

    assert!(body.toasts.borrow().is_empty());
    assert_eq!(clock.pending(), 0);
}

// =============================================================
// share_venue
// =============================================================

#[test]
fn native_share_is_preferred_when_available() {
    let clipboard = FakeClipboard::working();
    let sheet = FakeSheet::new(true, false);
    let body = FakeBody::default();
    let clock = ManualScheduler::new();
    let context = ShareContext { clipboard: &clipboard, toasts: &body, scheduler: &clock };

    block_on(context.share_venue(&sheet, "The Vault", "https://rooms.example/venue/7"));

    assert_eq!(
        *sheet.shared.borrow(),
        vec![("The Vault".to_owned(), "https://rooms.example/venue/7".to_owned())]
    );
    assert!(clipboard.written.borrow().is_empty());
    assert!(body.toasts.borrow().is_empty());
}

#[test]
fn cancelled_share_does_not_fall_back() {
    let clipboard = FakeClipboard::working();
    let sheet = FakeSheet::new(true, true);
    let body = FakeBody::default();
    let clock = ManualScheduler::new();
    let context = ShareContext { clipboard: &clipboard, toasts: &body, scheduler: &clock };

    block_on(context.share_venue(&sheet, "The Vault", "https://rooms.example/venue/7"));

    assert_eq!(sheet.shared.borrow().len(), 1);
    assert!(clipboard.written.borrow().is_empty());
}

#[test]
fn missing_share_sheet_copies_url() {
    let clipboard = FakeClipboard::working();
    let sheet = FakeSheet::new(false, false);
    let body = FakeBody::default();
    let clock = ManualScheduler::new();
    let context = ShareContext { clipboard: &clipboard, toasts: &body, scheduler: &clock };

    block_on(context.share_venue(&sheet, "The Vault", "https://rooms.example/venue/7"));

    assert!(sheet.shared.borrow().is_empty());
    assert_eq!(*clipboard.written.borrow(), vec!["https://rooms.example/venue/7".to_owned()]);
    assert_eq!(*body.toasts.borrow(), vec![TOAST_MESSAGE.to_owned()]);
}
