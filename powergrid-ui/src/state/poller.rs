//! Repeating poll task owned by a view.

use gloo_timers::callback::Interval;

/// Runs a tick immediately, then every `period_ms`.
///
/// Dropping the handle clears the timer; ticks already running are unaffected.
pub struct PollHandle {
    _interval: Interval,
}

impl PollHandle {
    pub fn start<F>(period_ms: u32, mut tick: F) -> Self
    where
        F: FnMut() + 'static,
    {
        tick();

        Self {
            _interval: Interval::new(period_ms, tick),
        }
    }
}
