//! Deterministic, host-driven timing primitives.
//!
//! Nothing here owns a thread or an OS timer. Hosts push wall-clock
//! milliseconds in through [`Scheduler::pop_due`] and the widget controllers
//! drain due timers one by one, re-checking their own state after each.

mod autoplay_timer;
mod timer_queue;

pub use autoplay_timer::AutoplayTimer;
pub use timer_queue::TimerQueue;

use serde::{Deserialize, Serialize};

/// Copyable identity of a scheduled timer, used to match fires to owners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(pub(crate) u64);

/// Cancellation handle returned by [`Scheduler::schedule`].
///
/// The token is neither `Copy` nor `Clone`: whoever holds it is the only
/// party able to cancel the timer, and cancelling consumes it.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a dropped token leaves the timer scheduled with no way to cancel it"]
pub struct TimerToken {
    id: TimerId,
}

impl TimerToken {
    pub(crate) fn new(id: TimerId) -> Self {
        Self { id }
    }

    #[must_use]
    pub fn id(&self) -> TimerId {
        self.id
    }
}

/// One expired timer, reported at its nominal due time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerFire {
    pub id: TimerId,
    pub due_ms: u64,
}

/// Host frame-clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameTick {
    pub timestamp_ms: u64,
}

impl FrameTick {
    #[must_use]
    pub fn new(timestamp_ms: u64) -> Self {
        Self { timestamp_ms }
    }
}

/// Timer source injected into widget controllers.
pub trait Scheduler {
    /// Last clock value observed by the scheduler.
    fn now_ms(&self) -> u64;

    /// Schedules a timer `delay_ms` after [`Scheduler::now_ms`].
    ///
    /// With `period_ms` set, the timer repeats every `period_ms` after its
    /// first fire until cancelled.
    fn schedule(&mut self, delay_ms: u64, period_ms: Option<u64>) -> TimerToken;

    /// Moves the clock forward to `now_ms` without firing anything. Timers
    /// already due stay queued for the next [`Scheduler::pop_due`]. The clock
    /// never moves backwards.
    fn set_now(&mut self, now_ms: u64);

    /// Cancels a pending timer. Returns `false` when it already expired.
    fn cancel(&mut self, token: TimerToken) -> bool;

    #[must_use]
    fn is_pending(&self, id: TimerId) -> bool;

    /// Pops the earliest timer due at or before `now_ms` and moves the clock
    /// to its due time. When nothing is due the clock moves to `now_ms` and
    /// `None` is returned.
    fn pop_due(&mut self, now_ms: u64) -> Option<TimerFire>;
}
