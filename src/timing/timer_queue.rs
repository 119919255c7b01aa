use smallvec::SmallVec;
use tracing::trace;

use super::{Scheduler, TimerFire, TimerId, TimerToken};

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    id: TimerId,
    due_ms: u64,
    period_ms: Option<u64>,
}

/// Manual-clock scheduler. Time only moves when the host calls
/// [`Scheduler::pop_due`], which keeps every widget test deterministic.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now_ms: u64,
    next_id: u64,
    pending: SmallVec<[PendingTimer; 4]>,
}

impl TimerQueue {
    #[must_use]
    pub fn new(now_ms: u64) -> Self {
        Self {
            now_ms,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Due time of a pending timer, if any.
    #[must_use]
    pub fn due_ms(&self, id: TimerId) -> Option<u64> {
        self.pending
            .iter()
            .find(|timer| timer.id == id)
            .map(|timer| timer.due_ms)
    }
}

impl Scheduler for TimerQueue {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn schedule(&mut self, delay_ms: u64, period_ms: Option<u64>) -> TimerToken {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let due_ms = self.now_ms.saturating_add(delay_ms);
        // A zero period would fire forever inside one `pop_due` drain.
        let period_ms = period_ms.filter(|period| *period > 0);
        trace!(timer = id.0, due_ms, ?period_ms, "schedule timer");
        self.pending.push(PendingTimer {
            id,
            due_ms,
            period_ms,
        });
        TimerToken::new(id)
    }

    fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    fn cancel(&mut self, token: TimerToken) -> bool {
        let id = token.id();
        match self.pending.iter().position(|timer| timer.id == id) {
            Some(position) => {
                self.pending.remove(position);
                trace!(timer = id.0, "cancel timer");
                true
            }
            None => false,
        }
    }

    fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|timer| timer.id == id)
    }

    fn pop_due(&mut self, now_ms: u64) -> Option<TimerFire> {
        let next = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due_ms <= now_ms)
            .min_by_key(|(_, timer)| (timer.due_ms, timer.id))
            .map(|(position, _)| position);

        let Some(position) = next else {
            self.now_ms = self.now_ms.max(now_ms);
            return None;
        };

        let timer = self.pending[position];
        self.now_ms = self.now_ms.max(timer.due_ms);
        match timer.period_ms {
            Some(period) => self.pending[position].due_ms = timer.due_ms.saturating_add(period),
            None => {
                self.pending.remove(position);
            }
        }

        Some(TimerFire {
            id: timer.id,
            due_ms: timer.due_ms,
        })
    }
}
