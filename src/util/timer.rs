//! Deferred-callback seam.
//!
//! Browser code schedules through [`BrowserScheduler`] (`gloo-timers`
//! `Timeout`); tests drive a manual clock. Dropping a handle cancels the
//! pending callback, matching `Timeout`'s own drop behavior.

/// Something that can run a callback after a delay.
pub trait Scheduler {
    /// Pending-callback handle. Dropping it cancels the callback.
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;

    /// Let a scheduled callback run even though its handle goes away.
    fn detach(&self, handle: Self::Handle);
}

/// `setTimeout`-backed scheduler.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, task)
    }

    fn detach(&self, handle: Self::Handle) {
        handle.forget();
    }
}
