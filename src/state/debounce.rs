//! Trailing debounce, driven by explicit timestamps.
//!
//! Each `schedule` replaces whatever was pending and pushes the deadline to
//! `now + delay`. Only the last value of a burst fires, once the quiet period
//! has elapsed. The event loop sleeps until [`Debouncer::deadline`] and then
//! calls [`Debouncer::poll`].

use std::time::{Duration, Instant};

/// Default quiet period before a search is dispatched.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(750);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Trailing-edge debouncer holding at most one pending value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value`, replacing any pending one.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
    }

    /// When the pending value becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Drop the pending value without firing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
