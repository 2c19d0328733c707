//! Trailing-edge debounce.
//!
//! Each call replaces the pending one; only the last call in a burst runs,
//! `wait_ms` after that call. There is no leading-edge option.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::RefCell;
use std::rc::Rc;

use super::timer::Scheduler;

pub struct Debounced<A, S: Scheduler> {
    func: Rc<dyn Fn(A)>,
    wait_ms: u32,
    scheduler: S,
    pending: RefCell<Option<S::Handle>>,
}

impl<A: 'static, S: Scheduler> Debounced<A, S> {
    pub fn new(func: impl Fn(A) + 'static, wait_ms: u32, scheduler: S) -> Self {
        Self { func: Rc::new(func), wait_ms, scheduler, pending: RefCell::new(None) }
    }

    /// Schedule `func(args)` after the wait, cancelling any pending call.
    pub fn call(&self, args: A) {
        let func = Rc::clone(&self.func);
        let handle = self
            .scheduler
            .schedule(self.wait_ms, Box::new(move || func(args)));
        // Dropping the old handle cancels the stale call.
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Drop the pending call, if any.
    pub fn cancel(&self) {
        *self.pending.borrow_mut() = None;
    }

    #[must_use]
    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }
}
