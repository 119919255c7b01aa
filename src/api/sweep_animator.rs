use serde::{Deserialize, Serialize};

use crate::core::clamp_percent;

use super::SweepBehavior;

/// Intro sweep lifecycle. `Settled` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepPhase {
    /// Waiting for the visibility trigger.
    Armed,
    /// Visibility crossed; the start delay is running.
    Scheduled,
    Sweeping,
    Settled,
}

/// Pure sweep state: phase transitions plus eased sampling. Timers and
/// frame delivery live in the slider controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepAnimator {
    behavior: SweepBehavior,
    phase: SweepPhase,
    started_at_ms: Option<u64>,
}

impl SweepAnimator {
    #[must_use]
    pub fn new(behavior: SweepBehavior) -> Self {
        let phase = if behavior.enabled {
            SweepPhase::Armed
        } else {
            SweepPhase::Settled
        };
        Self {
            behavior,
            phase,
            started_at_ms: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> SweepPhase {
        self.phase
    }

    #[must_use]
    pub fn started_at_ms(&self) -> Option<u64> {
        self.started_at_ms
    }

    /// `Armed -> Scheduled`. Any other phase is left untouched.
    pub fn schedule(&mut self) -> bool {
        self.transition(SweepPhase::Armed, SweepPhase::Scheduled)
    }

    /// `Scheduled -> Sweeping`, anchored at `at_ms`.
    pub fn begin(&mut self, at_ms: u64) -> bool {
        if !self.transition(SweepPhase::Scheduled, SweepPhase::Sweeping) {
            return false;
        }
        self.started_at_ms = Some(at_ms);
        true
    }

    /// Forces the terminal phase. Returns `true` when the phase changed.
    pub fn settle(&mut self) -> bool {
        if self.phase == SweepPhase::Settled {
            return false;
        }
        self.phase = SweepPhase::Settled;
        true
    }

    /// Position for `now_ms` while sweeping. The final sample lands exactly
    /// on `to_percent` and settles the animator.
    pub fn sample(&mut self, now_ms: u64) -> Option<f64> {
        if self.phase != SweepPhase::Sweeping {
            return None;
        }
        let started_at_ms = self.started_at_ms?;
        let elapsed_ms = now_ms.saturating_sub(started_at_ms);
        if elapsed_ms >= self.behavior.duration_ms {
            self.phase = SweepPhase::Settled;
            return Some(clamp_percent(self.behavior.to_percent));
        }

        let progress = elapsed_ms as f64 / self.behavior.duration_ms as f64;
        let eased = self.behavior.ease.apply(progress);
        let from = self.behavior.from_percent;
        let to = self.behavior.to_percent;
        Some(clamp_percent(from + (to - from) * eased))
    }

    fn transition(&mut self, from: SweepPhase, to: SweepPhase) -> bool {
        if self.phase != from {
            return false;
        }
        self.phase = to;
        true
    }
}
