//! Timer helpers built on `gloo-timers`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Trailing-edge debouncer.
///
/// Each call to [`Debouncer::call`] replaces the pending timeout; dropping
/// the old `Timeout` cancels it, so only the last call in a burst runs.
#[derive(Clone)]
pub struct Debouncer {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Schedule `f`, cancelling whatever was scheduled before.
    pub fn call(&self, f: impl FnOnce() + 'static) {
        // A fired timeout stays in the slot until the next call; clearing
        // an expired timer id is a no-op.
        let timeout = Timeout::new(self.delay_ms, f);
        self.pending.borrow_mut().replace(timeout);
    }
}

/// Run `f` once after `delay_ms`, detached.
pub fn after(delay_ms: u32, f: impl FnOnce() + 'static) {
    Timeout::new(delay_ms, f).forget();
}
