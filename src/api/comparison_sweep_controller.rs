use tracing::{debug, trace};

use crate::interaction::VisibilitySignal;
use crate::timing::{FrameTick, Scheduler};

use super::{
    ComparisonEvent, ComparisonFrame, ComparisonSliderController, PositionSource, SweepPhase,
};

impl<S: Scheduler> ComparisonSliderController<S> {
    /// Feeds a visibility sample observed at host time `now_ms`. The first
    /// sample at or past the threshold while `Armed` schedules the sweep the
    /// configured delay after `now_ms`.
    ///
    /// Returns `true` when this call scheduled the sweep.
    pub fn on_visible(&mut self, signal: VisibilitySignal, now_ms: u64) -> bool {
        self.sync_clock(now_ms);
        if self.sweep.phase() != SweepPhase::Armed {
            return false;
        }
        if !self.visibility.observe(signal) {
            return false;
        }
        let token = self.scheduler.schedule(self.config.sweep.delay_ms, None);
        self.sweep_delay = Some(token);
        self.sweep.schedule();
        debug!(
            delay_ms = self.config.sweep.delay_ms,
            "comparison sweep scheduled"
        );
        self.emit(ComparisonEvent::SweepPhaseChanged(SweepPhase::Scheduled));
        true
    }

    /// Enters drag at host time `now_ms`. Settles the sweep for the widget's
    /// lifetime and disconnects the visibility trigger. A sweep delay expiring
    /// exactly at `now_ms` loses to the drag.
    pub fn drag_start(&mut self, now_ms: u64) {
        self.sync_clock(now_ms);
        if self.dragging {
            return;
        }
        self.dragging = true;
        self.settle_sweep();
        self.emit(ComparisonEvent::DragStarted);
    }

    pub fn drag_end(&mut self, now_ms: u64) {
        self.sync_clock(now_ms);
        if !self.dragging {
            return;
        }
        self.dragging = false;
        // Host-driven ends also close any pointer session still bound.
        self.arbiter.reset_session();
        self.emit(ComparisonEvent::DragEnded);
    }

    /// Pushes the host clock to `now_ms` and starts the sweep once its delay
    /// expires. A drag already in progress at that moment skips the sweep.
    pub fn advance_to(&mut self, now_ms: u64) {
        while let Some(fire) = self.scheduler.pop_due(now_ms) {
            let owned = self
                .sweep_delay
                .as_ref()
                .is_some_and(|token| token.id() == fire.id);
            if !owned {
                trace!(timer = ?fire.id, "ignoring foreign timer fire");
                continue;
            }
            self.sweep_delay = None;
            if self.dragging {
                self.settle_sweep();
                continue;
            }
            if self.sweep.begin(fire.due_ms) {
                debug!(started_at_ms = fire.due_ms, "comparison sweep started");
                self.emit(ComparisonEvent::SweepPhaseChanged(SweepPhase::Sweeping));
            }
        }
    }

    /// Frame-clock callback. Advances timers, then writes the next sweep
    /// sample. Frames while dragging are suppressed.
    pub fn on_frame(&mut self, tick: FrameTick) -> Option<ComparisonFrame> {
        self.advance_to(tick.timestamp_ms);
        if self.sweep.phase() != SweepPhase::Sweeping {
            return None;
        }
        if self.dragging {
            trace!(timestamp_ms = tick.timestamp_ms, "suppressing sweep frame during drag");
            return None;
        }
        let percent = self.sweep.sample(tick.timestamp_ms)?;
        let frame = self.write_position(percent, PositionSource::Sweep);
        if self.sweep.phase() == SweepPhase::Settled {
            debug!("comparison sweep finished");
            self.emit(ComparisonEvent::SweepPhaseChanged(SweepPhase::Settled));
        }
        Some(frame)
    }

    /// Brings the clock to `now_ms` ahead of host input. Timers due strictly
    /// before `now_ms` run first; one due exactly at `now_ms` runs after the
    /// input.
    pub(super) fn sync_clock(&mut self, now_ms: u64) {
        if let Some(before_ms) = now_ms.checked_sub(1) {
            self.advance_to(before_ms);
        }
        self.scheduler.set_now(now_ms);
    }

    fn settle_sweep(&mut self) {
        if let Some(token) = self.sweep_delay.take() {
            self.scheduler.cancel(token);
        }
        self.visibility.disconnect();
        if self.sweep.settle() {
            debug!("comparison sweep settled permanently");
            self.emit(ComparisonEvent::SweepPhaseChanged(SweepPhase::Settled));
        }
    }
}
