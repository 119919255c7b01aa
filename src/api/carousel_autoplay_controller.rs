use tracing::trace;

use crate::error::WidgetResult;
use crate::interaction::InteractionMode;
use crate::timing::Scheduler;

use super::validation::validate_autoplay_behavior;
use super::{AutoplayBehavior, CarouselController, CarouselEvent, NavigationCause};

impl<S: Scheduler> CarouselController<S> {
    #[must_use]
    pub fn autoplay_active(&self) -> bool {
        self.autoplay.is_running()
    }

    #[must_use]
    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay_enabled
    }

    /// Starts autoplay at host time `now_ms`. Idempotent: a running timer
    /// keeps its phase.
    ///
    /// Returns `true` when this call started the timer.
    pub fn start_autoplay(&mut self, now_ms: u64) -> bool {
        self.sync_clock(now_ms);
        if !self.autoplay_enabled {
            return false;
        }
        self.start_autoplay_timer()
    }

    /// Starts autoplay with a new interval. A running timer keeps its phase
    /// and picks up the interval on its next restart.
    pub fn start_autoplay_with_interval(
        &mut self,
        interval_ms: u64,
        now_ms: u64,
    ) -> WidgetResult<bool> {
        let behavior = validate_autoplay_behavior(AutoplayBehavior {
            interval_ms,
            ..self.config.autoplay
        })?;
        self.config.autoplay = behavior;
        self.autoplay.set_interval_ms(interval_ms);
        Ok(self.start_autoplay(now_ms))
    }

    /// Synchronously cancels the pending tick. Manual navigation and hover
    /// exit start it again; use [`Self::set_autoplay_enabled`] to turn
    /// autoplay off for good.
    pub fn stop_autoplay(&mut self) -> bool {
        self.stop_autoplay_timer()
    }

    pub fn set_autoplay_enabled(&mut self, enabled: bool, now_ms: u64) {
        self.sync_clock(now_ms);
        self.autoplay_enabled = enabled;
        if enabled {
            if self.autoplay_allowed() {
                self.start_autoplay_timer();
            }
        } else {
            self.stop_autoplay_timer();
        }
    }

    /// Pushes the host clock to `now_ms` and honors due autoplay ticks.
    ///
    /// Ticks are drained one at a time so each sees the state left by the
    /// previous one; ticks arriving mid-drag are dropped. Returns the number
    /// of autoplay advances applied.
    pub fn advance_to(&mut self, now_ms: u64) -> usize {
        let mut advanced = 0;
        while let Some(fire) = self.scheduler.pop_due(now_ms) {
            if !self.autoplay.owns(&fire) {
                trace!(timer = ?fire.id, "ignoring foreign timer fire");
                continue;
            }
            if self.arbiter.mode() == InteractionMode::Dragging {
                trace!(due_ms = fire.due_ms, "dropping autoplay tick during drag");
                continue;
            }
            let target = self.current_index_i64().saturating_add(1);
            self.apply_index(target, true, NavigationCause::Autoplay);
            advanced += 1;
        }
        advanced
    }

    /// Brings the clock to `now_ms` ahead of host input. Ticks due strictly
    /// before `now_ms` are honored first; a tick due exactly at `now_ms` stays
    /// queued, so the input lands first and may cancel it.
    pub(super) fn sync_clock(&mut self, now_ms: u64) {
        if let Some(before_ms) = now_ms.checked_sub(1) {
            self.advance_to(before_ms);
        }
        self.scheduler.set_now(now_ms);
    }

    pub(super) fn autoplay_allowed(&self) -> bool {
        self.autoplay_enabled
            && !(self.config.autoplay.pause_on_hover && self.hovered)
            && self.arbiter.mode() == InteractionMode::Idle
    }

    /// Stop-then-start after a manual change. Stays stopped while hovered or
    /// dragging.
    pub(super) fn restart_autoplay_after_navigation(&mut self) {
        let was_running = self.autoplay.stop(&mut self.scheduler);
        if self.autoplay_allowed() {
            self.autoplay.start(&mut self.scheduler);
            if !was_running {
                self.emit_autoplay_started();
            }
        } else if was_running {
            self.emit(CarouselEvent::AutoplayStopped);
        }
    }

    pub(super) fn start_autoplay_timer(&mut self) -> bool {
        let started = self.autoplay.start(&mut self.scheduler);
        if started {
            self.emit_autoplay_started();
        }
        started
    }

    pub(super) fn stop_autoplay_timer(&mut self) -> bool {
        let stopped = self.autoplay.stop(&mut self.scheduler);
        if stopped {
            self.emit(CarouselEvent::AutoplayStopped);
        }
        stopped
    }

    fn emit_autoplay_started(&mut self) {
        let interval_ms = self.autoplay.interval_ms();
        self.emit(CarouselEvent::AutoplayStarted { interval_ms });
    }
}
