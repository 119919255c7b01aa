use tracing::debug;

use super::{Scheduler, TimerFire, TimerToken};

/// Cancellable repeating timer with start/stop/reset semantics.
#[derive(Debug)]
pub struct AutoplayTimer {
    interval_ms: u64,
    token: Option<TimerToken>,
}

impl AutoplayTimer {
    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            token: None,
        }
    }

    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Takes effect on the next start or reset.
    pub fn set_interval_ms(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.token.is_some()
    }

    /// Starts the timer. No-op returning `false` when already running, so the
    /// current phase is kept.
    pub fn start<S: Scheduler>(&mut self, scheduler: &mut S) -> bool {
        if self.token.is_some() {
            return false;
        }
        self.token = Some(scheduler.schedule(self.interval_ms, Some(self.interval_ms)));
        debug!(interval_ms = self.interval_ms, "autoplay timer started");
        true
    }

    /// Stops the timer synchronously. Returns `false` when it was not running.
    pub fn stop<S: Scheduler>(&mut self, scheduler: &mut S) -> bool {
        match self.token.take() {
            Some(token) => {
                scheduler.cancel(token);
                debug!("autoplay timer stopped");
                true
            }
            None => false,
        }
    }

    /// Stop followed by start: the next tick lands a full interval from now.
    pub fn reset<S: Scheduler>(&mut self, scheduler: &mut S) {
        self.stop(scheduler);
        self.start(scheduler);
    }

    #[must_use]
    pub fn owns(&self, fire: &TimerFire) -> bool {
        self.token.as_ref().is_some_and(|token| token.id() == fire.id)
    }
}
