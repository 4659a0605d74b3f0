/// Timer capability with cancellable handles
use chrono::{DateTime, Utc};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;

/// Source of delayed callbacks and of the current time
///
/// Dropping a handle cancels its task if it has not run yet.
pub trait Scheduler {
    type Handle: 'static;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;

    fn now(&self) -> DateTime<Utc>;
}

/// `setTimeout`-backed scheduler
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Holds at most one pending task; arming it again supersedes the old one
pub struct TimerSlot<H> {
    pending: RefCell<Option<H>>,
}

impl<H> TimerSlot<H> {
    pub fn new() -> Self {
        TimerSlot {
            pending: RefCell::new(None),
        }
    }

    pub fn arm(&self, handle: H) {
        // The old handle is dropped after the borrow ends, cancelling it
        let previous = self.pending.borrow_mut().replace(handle);
        drop(previous);
    }
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}
