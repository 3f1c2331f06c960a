//! Countdown arithmetic and the one-second ticking driver.
//!
//! DESIGN
//! ======
//! `Countdown` owns at most one repeating tick obtained from a `TickSource`.
//! The browser uses `gloo-timers` intervals; tests use a fake source whose
//! live-timer count is observable. The tick handle is dropped on expiry, on
//! `stop`, and when the `Countdown` itself is dropped.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

pub const TICK_INTERVAL_MS: u32 = 1_000;

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Time left until a target, split into display units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Remaining time from `now_ms` to `target_ms`; `None` once the target has passed.
    #[must_use]
    pub fn until(target_ms: i64, now_ms: i64) -> Option<Self> {
        let distance = target_ms.checked_sub(now_ms)?;
        if distance < 0 {
            return None;
        }
        Some(Self {
            days: distance / DAY_MS,
            hours: (distance % DAY_MS) / HOUR_MS,
            minutes: (distance % HOUR_MS) / MINUTE_MS,
            seconds: (distance % MINUTE_MS) / SECOND_MS,
        })
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d {}h {}m {}s", self.days, self.hours, self.minutes, self.seconds)
    }
}

/// Something that can run a callback repeatedly until its handle is released.
pub trait TickSource: Clone + 'static {
    /// Dropping the handle must stop the ticks.
    type Handle: 'static;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;

    /// Release a handle. May be called from inside that handle's own tick.
    fn cancel(&self, handle: Self::Handle) {
        drop(handle);
    }
}

/// Repeating countdown toward one target instant.
pub struct Countdown<S: TickSource> {
    source: S,
    handle: Rc<RefCell<Option<S::Handle>>>,
}

impl<S: TickSource> Countdown<S> {
    pub fn new(source: S) -> Self {
        Self { source, handle: Rc::new(RefCell::new(None)) }
    }

    /// Start ticking toward `target_ms`, replacing any previous run.
    ///
    /// Each tick reads `clock` and passes the formatted remaining time to
    /// `render`. The first tick after the target has passed renders an empty
    /// string and releases the tick.
    pub fn start<C, R>(&self, target_ms: i64, clock: C, mut render: R)
    where
        C: Fn() -> i64 + 'static,
        R: FnMut(String) + 'static,
    {
        self.stop();
        let slot = Rc::clone(&self.handle);
        let source = self.source.clone();
        let handle = self.source.every(
            TICK_INTERVAL_MS,
            Box::new(move || {
                if let Some(remaining) = Remaining::until(target_ms, clock()) {
                    render(remaining.to_string());
                    return;
                }
                render(String::new());
                let expired = slot.borrow_mut().take();
                if let Some(expired) = expired {
                    source.cancel(expired);
                }
            }),
        );
        *self.handle.borrow_mut() = Some(handle);
    }

    /// Release the tick if one is running.
    pub fn stop(&self) {
        let running = self.handle.borrow_mut().take();
        if let Some(running) = running {
            self.source.cancel(running);
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.borrow().is_some()
    }
}

impl<S: TickSource> Drop for Countdown<S> {
    fn drop(&mut self) {
        self.stop();
    }
}
