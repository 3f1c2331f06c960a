//! Browser tick source backed by `gloo-timers`.

use gloo_timers::callback::Interval;

use crate::state::countdown::TickSource;

/// `setInterval` ticks. Dropping or cancelling the handle clears the interval.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTicks;

impl TickSource for BrowserTicks {
    type Handle = Interval;

    fn every(&self, period_ms: u32, mut tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, move || tick())
    }

    fn cancel(&self, handle: Interval) {
        // Clear now; free the JS closure after the current callback returns.
        let closure = handle.cancel();
        leptos::task::spawn_local(async move { drop(closure) });
    }
}
