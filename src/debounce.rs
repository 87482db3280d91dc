//! Cancellable delayed tasks.
//!
//! The session schedules exactly two kinds of delayed work: settling a
//! debounced query and hiding after focus loss. Both are plain state
//! machines polled from the host's event loop; time arrives as an argument,
//! so behavior is deterministic under test.

use std::time::{Duration, Instant};

/// A one-shot timer polled by the host loop.
///
/// Arming an already armed timer supersedes the previous deadline; in a
/// cooperative loop that is what cancel-and-reschedule amounts to.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelayTimer {
    deadline: Option<Instant>,
}

impl DelayTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the timer to fire `delay` after `now`.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Disarm without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once when the deadline has been reached.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Debounced query input.
///
/// Every edit supersedes the pending one and restarts the settle clock;
/// the query settles once the delay elapses with no newer input. Last
/// write wins.
#[derive(Debug, Clone)]
pub struct QueryDebouncer {
    pending: Option<String>,
    timer: DelayTimer,
    delay: Duration,
}

impl QueryDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            pending: None,
            timer: DelayTimer::new(),
            delay,
        }
    }

    /// Accept an edit and restart the settle clock.
    pub fn submit(&mut self, text: impl Into<String>, now: Instant) {
        self.pending = Some(text.into());
        self.timer.arm(now, self.delay);
    }

    /// The settled query, once the delay has elapsed with no newer input.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        if self.timer.fire(now) {
            self.pending.take()
        } else {
            None
        }
    }

    /// Drop any pending input without evaluating it.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.timer.cancel();
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_timer_fires_once() {
        let t0 = Instant::now();
        let mut timer = DelayTimer::new();

        timer.arm(t0, 100 * MS);
        assert!(timer.is_armed());
        assert!(!timer.fire(t0 + 99 * MS));
        assert!(timer.fire(t0 + 100 * MS));
        // Already fired; a later poll stays quiet
        assert!(!timer.fire(t0 + 200 * MS));
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_timer_rearm_supersedes() {
        let t0 = Instant::now();
        let mut timer = DelayTimer::new();

        timer.arm(t0, 100 * MS);
        timer.arm(t0 + 50 * MS, 100 * MS);

        assert!(!timer.fire(t0 + 100 * MS));
        assert!(timer.fire(t0 + 150 * MS));
    }

    #[test]
    fn test_timer_cancel() {
        let t0 = Instant::now();
        let mut timer = DelayTimer::new();

        timer.arm(t0, 100 * MS);
        timer.cancel();

        assert!(!timer.is_armed());
        assert!(!timer.fire(t0 + 500 * MS));
    }

    #[test]
    fn test_zero_delay_fires_immediately() {
        let t0 = Instant::now();
        let mut timer = DelayTimer::new();

        timer.arm(t0, Duration::ZERO);
        assert!(timer.fire(t0));
    }

    #[test]
    fn test_debouncer_settles_after_quiet_period() {
        let t0 = Instant::now();
        let mut debouncer = QueryDebouncer::new(300 * MS);

        debouncer.submit("dark", t0);
        assert_eq!(debouncer.poll(t0 + 299 * MS), None);
        assert_eq!(debouncer.poll(t0 + 300 * MS).as_deref(), Some("dark"));
        // Settled and consumed
        assert_eq!(debouncer.poll(t0 + 600 * MS), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_last_write_wins() {
        let t0 = Instant::now();
        let mut debouncer = QueryDebouncer::new(300 * MS);

        debouncer.submit("s", t0);
        debouncer.submit("st", t0 + 100 * MS);
        debouncer.submit("str", t0 + 200 * MS);

        // The first deadline passed, but newer input pushed it back
        assert_eq!(debouncer.poll(t0 + 350 * MS), None);
        assert_eq!(debouncer.poll(t0 + 500 * MS).as_deref(), Some("str"));
    }

    #[test]
    fn test_cancel_drops_pending() {
        let t0 = Instant::now();
        let mut debouncer = QueryDebouncer::new(300 * MS);

        debouncer.submit("dark", t0);
        debouncer.cancel();

        assert_eq!(debouncer.poll(t0 + 400 * MS), None);
    }

    #[test]
    fn test_empty_text_still_settles() {
        // Clearing the input is an edit like any other; the session routes
        // the settled empty query to the recents path.
        let t0 = Instant::now();
        let mut debouncer = QueryDebouncer::new(300 * MS);

        debouncer.submit("dark", t0);
        debouncer.submit("", t0 + 100 * MS);

        assert_eq!(debouncer.poll(t0 + 400 * MS).as_deref(), Some(""));
    }
}
